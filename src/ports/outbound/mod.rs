/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod progress_reporter;
pub mod project_importer;
pub mod scan_reader;

pub use progress_reporter::ProgressReporter;
pub use project_importer::{Acknowledgment, ProjectImporter};
pub use scan_reader::ScanReader;
