use crate::project_building::domain::ScanData;
use crate::shared::Result;
use std::path::Path;

/// ScanReader port for loading scan exports
///
/// This port abstracts reading and parsing the scanner's export file, so
/// the use case only ever sees typed scan records.
pub trait ScanReader {
    /// Reads and parses the scan export at the given path
    ///
    /// # Arguments
    /// * `path` - Path to the export file
    ///
    /// # Returns
    /// The parsed scan data, in file order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a readable regular file
    /// - The file content is not a valid export
    fn read_scan(&self, path: &Path) -> Result<ScanData>;
}
