pub mod project;
pub mod scan;
pub mod submission;

pub use project::{Command, Host, Note, OperatingSystem, Project, Service};
pub use scan::{ScanData, ScanRecord, ServiceRecord};
pub use submission::SubmissionOptions;
