use crate::application::dto::{ImportRequest, ImportResponse};
use crate::shared::Result;

/// ScanImportPort - Inbound port for the scan import use case
///
/// This port is the application's public entry point: the CLI hands it a
/// fully resolved request and gets back the server's acknowledgment.
pub trait ScanImportPort {
    /// Reads a scan export, builds the Lair project and imports it
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request is invalid (e.g. empty project id)
    /// - The scan export cannot be read or parsed
    /// - The import fails or is rejected by the server
    fn import_scan(&self, request: ImportRequest) -> Result<ImportResponse>;
}
