/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_project_importer;
mod mock_scan_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_importer::MockProjectImporter;
pub use mock_scan_reader::MockScanReader;
