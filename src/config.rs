//! Configuration file support for drone-msf.
//!
//! Provides YAML-based configuration through `drone-msf.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::{parse_tags, Args};
use drone_msf::prelude::{DroneError, SubmissionOptions};
use drone_msf::shared::Result;

pub const CONFIG_FILENAME: &str = "drone-msf.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<String>,
    pub tags: Option<Vec<String>>,
    pub force_ports: Option<bool>,
    pub limit_hosts: Option<bool>,
    pub insecure: Option<bool>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}. 💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}. 💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0. \
             💡 Hint: Remove the field to wait for the server without a limit."
        );
    }
    if let Some(ref server) = config.server {
        if server.trim().is_empty() {
            bail!("Invalid config: server must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Settings after merging command-line arguments, environment, and config file.
///
/// Command-line values (and their environment fallbacks) win over the config
/// file; boolean switches are enabled if either source enables them.
#[derive(Debug)]
pub struct Settings {
    pub server: String,
    pub project_id: String,
    pub scan_path: PathBuf,
    pub tags: Vec<String>,
    pub options: SubmissionOptions,
    pub insecure: bool,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let server = args
            .server
            .clone()
            .filter(|s| !s.is_empty())
            .or(config.server)
            .ok_or_else(|| DroneError::MissingConfiguration {
                name: "LAIR_API_SERVER".to_string(),
            })?;

        let (project_id, scan_path) = args.project_id_and_scan_path();
        let scan_path = scan_path.ok_or_else(|| DroneError::MissingArgument {
            name: "filename".to_string(),
        })?;
        let project_id = project_id.ok_or_else(|| DroneError::MissingConfiguration {
            name: "LAIR_ID".to_string(),
        })?;

        let tags = match args.tags {
            Some(ref raw) => parse_tags(raw),
            None => config.tags.unwrap_or_default(),
        };

        let options = SubmissionOptions::new(
            args.force_ports || config.force_ports.unwrap_or(false),
            args.limit_hosts || config.limit_hosts.unwrap_or(false),
        );

        Ok(Self {
            server,
            project_id,
            scan_path,
            tags,
            options,
            insecure: args.insecure || config.insecure.unwrap_or(false),
            timeout: args
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
        })
    }
}
