use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod validation;

use crate::host::HostPlatform;
use crate::iso::IsoOptions;

/// Build settings read from a JSON file and merged with the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsoConfig {
    /// Host tool to drive. Detected from the running OS when absent.
    #[serde(default)]
    pub host: Option<HostPlatform>,

    #[serde(flatten)]
    pub options: IsoOptions,
}

impl IsoConfig {
    /// Apply command line values on top of the file values.
    pub fn merge_overrides(
        mut self,
        host: Option<HostPlatform>,
        file_destination: Option<PathBuf>,
        volume_id: Option<String>,
    ) -> Self {
        if host.is_some() {
            self.host = host;
        }
        if file_destination.is_some() {
            self.options.file_destination = file_destination;
        }
        if volume_id.is_some() {
            self.options.volume_id = volume_id;
        }
        self
    }
}

/// Load and parse a configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<IsoConfig> {
    let path = path.as_ref();
    info!("Loading configuration from {}", path.display());

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: IsoConfig = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in config file: {}", path.display()))?;

    validation::validate_config(&config)
        .with_context(|| format!("Invalid configuration in file: {}", path.display()))?;

    debug!("Successfully loaded config: {:#?}", config);
    Ok(config)
}
