use drone_msf::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProjectImporter for testing that records submitted projects as JSON
#[derive(Clone)]
pub struct MockProjectImporter {
    pub submissions: Arc<Mutex<Vec<(SubmissionOptions, serde_json::Value)>>>,
    rejection: Option<String>,
}

impl MockProjectImporter {
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            rejection: None,
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            rejection: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn submissions(&self) -> Vec<(SubmissionOptions, serde_json::Value)> {
        self.submissions.lock().unwrap().clone()
    }
}

impl ProjectImporter for MockProjectImporter {
    fn import(&self, options: &SubmissionOptions, project: &Project) -> Result<Acknowledgment> {
        let json = serde_json::to_value(project)?;
        self.submissions.lock().unwrap().push((*options, json));

        match self.rejection {
            Some(ref message) => Err(ImportError::Rejected {
                message: message.clone(),
            }
            .into()),
            None => Ok(Acknowledgment::new("Ok".to_string(), String::new())),
        }
    }
}
