use drone_msf::prelude::*;
use std::path::Path;

/// Mock ScanReader for testing that returns fixed scan data
pub struct MockScanReader {
    scan_data: ScanData,
    should_fail: bool,
}

impl MockScanReader {
    pub fn new(scan_data: ScanData) -> Self {
        Self {
            scan_data,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            scan_data: ScanData::new(vec![]),
            should_fail: true,
        }
    }
}

impl ScanReader for MockScanReader {
    fn read_scan(&self, path: &Path) -> Result<ScanData> {
        if self.should_fail {
            return Err(DroneError::ScanFileReadError {
                path: path.to_path_buf(),
                details: "Mock failure".to_string(),
            }
            .into());
        }
        Ok(self.scan_data.clone())
    }
}
