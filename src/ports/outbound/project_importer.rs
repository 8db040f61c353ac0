use crate::project_building::domain::{Project, SubmissionOptions};
use crate::shared::Result;
use serde::{Deserialize, Deserializer};

/// Status value the Lair API server uses to reject an import
pub const ERROR_STATUS: &str = "Error";

/// Acknowledgment returned by the aggregation service
///
/// Any fields besides `status` and `message` are ignored. A missing or
/// null field reads as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledgment {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Acknowledgment {
    pub fn new(status: String, message: String) -> Self {
        Self { status, message }
    }

    /// True when the server rejected the import
    pub fn is_error(&self) -> bool {
        self.status == ERROR_STATUS
    }
}

/// ProjectImporter port for submitting a project to the aggregation service
///
/// Implementations send exactly one request per call and never retry.
pub trait ProjectImporter {
    /// Submits the project together with its submission options
    ///
    /// # Returns
    /// The server's acknowledgment when the import was accepted
    ///
    /// # Errors
    /// Returns an `ImportError` when the request could not be delivered,
    /// the response could not be decoded, or the server rejected the import
    fn import(&self, options: &SubmissionOptions, project: &Project) -> Result<Acknowledgment>;
}
