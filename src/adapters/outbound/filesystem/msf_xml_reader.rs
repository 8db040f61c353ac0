use crate::ports::outbound::ScanReader;
use crate::project_building::domain::{ScanData, ScanRecord, ServiceRecord};
use crate::shared::error::DroneError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Root element of a `db_export` file (`<MetasploitV4>` or `<MetasploitV5>`).
///
/// Only the host list is read; events, loots, web sites and the top-level
/// service list are ignored.
#[derive(Debug, Deserialize)]
struct MsfExport {
    #[serde(default)]
    hosts: MsfHosts,
}

#[derive(Debug, Default, Deserialize)]
struct MsfHosts {
    #[serde(rename = "host", default)]
    hosts: Vec<MsfHost>,
}

#[derive(Debug, Deserialize)]
struct MsfHost {
    #[serde(default)]
    address: String,
    #[serde(default)]
    mac: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    comments: String,
    #[serde(rename = "os-name", default)]
    os_name: String,
    #[serde(rename = "os-flavor", default)]
    os_flavor: String,
    #[serde(rename = "os-sp", default)]
    os_sp: String,
    #[serde(rename = "os-lang", default)]
    os_lang: String,
    #[serde(default)]
    arch: String,
    #[serde(default)]
    services: MsfServices,
}

#[derive(Debug, Default, Deserialize)]
struct MsfServices {
    #[serde(rename = "service", default)]
    services: Vec<MsfService>,
}

#[derive(Debug, Deserialize)]
struct MsfService {
    #[serde(default)]
    port: String,
    #[serde(default)]
    proto: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    info: String,
}

impl From<MsfHost> for ScanRecord {
    fn from(host: MsfHost) -> Self {
        ScanRecord {
            address: host.address,
            mac: host.mac,
            name: host.name,
            state: host.state,
            comments: host.comments,
            os_name: host.os_name,
            os_flavor: host.os_flavor,
            os_sp: host.os_sp,
            os_lang: host.os_lang,
            arch: host.arch,
            services: host
                .services
                .services
                .into_iter()
                .map(ServiceRecord::from)
                .collect(),
        }
    }
}

impl From<MsfService> for ServiceRecord {
    fn from(service: MsfService) -> Self {
        ServiceRecord {
            port: service.port,
            proto: service.proto,
            state: service.state,
            name: service.name,
            info: service.info,
        }
    }
}

/// MetasploitXmlReader adapter for reading Metasploit `db_export` XML files
///
/// This adapter implements the ScanReader port. Files are checked before
/// they are read: symbolic links, non-regular files and files above
/// `MAX_FILE_SIZE` are refused.
pub struct MetasploitXmlReader;

impl MetasploitXmlReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses export XML into scan data
    ///
    /// Text content is trimmed, so whitespace-only elements read as empty.
    pub fn parse(xml: &str) -> std::result::Result<ScanData, quick_xml::DeError> {
        let export: MsfExport = quick_xml::de::from_str(xml)?;
        Ok(ScanData::new(
            export
                .hosts
                .hosts
                .into_iter()
                .map(ScanRecord::from)
                .collect(),
        ))
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "scan file")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read scan file: {}", e))
    }
}

impl Default for MetasploitXmlReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanReader for MetasploitXmlReader {
    fn read_scan(&self, path: &Path) -> Result<ScanData> {
        let content = self
            .safe_read_file(path)
            .map_err(|e| DroneError::ScanFileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Self::parse(&content).map_err(|e| {
            DroneError::ScanParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
