use crate::project_building::domain::SubmissionOptions;
use std::path::PathBuf;

/// ImportRequest - Internal request DTO for the scan import use case
///
/// Everything here has already been resolved from the command line, the
/// environment and the config file.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Path to the Metasploit export file
    pub scan_path: PathBuf,
    /// Identifier of the target Lair project
    pub project_id: String,
    /// Tags applied to every imported host
    pub tags: Vec<String>,
    /// Data-quality overrides for the server
    pub options: SubmissionOptions,
}

impl ImportRequest {
    pub fn new(
        scan_path: PathBuf,
        project_id: String,
        tags: Vec<String>,
        options: SubmissionOptions,
    ) -> Self {
        Self {
            scan_path,
            project_id,
            tags,
            options,
        }
    }
}
