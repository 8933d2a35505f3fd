pub mod darwin;
pub mod linux;
pub mod windows;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::env::HostEnv;
use crate::iso::{IsoError, IsoOptions};

/// Host operating systems with a native ISO-building tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    Darwin,
    Linux,
    Windows,
}

impl HostPlatform {
    /// The platform this binary was built for, if it has an ISO capability.
    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(HostPlatform::Darwin)
        } else if cfg!(target_os = "linux") {
            Some(HostPlatform::Linux)
        } else if cfg!(target_os = "windows") {
            Some(HostPlatform::Windows)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HostPlatform::Darwin => "darwin",
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "windows",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait IsoHostCap: Send + Sync {
    /// Whether the host's disk-image tool is on the search path.
    fn isofs_available(&self, env: &HostEnv) -> bool;

    /// Pack `source` into an ISO image and return where it was written.
    fn create_iso(
        &self,
        env: &HostEnv,
        source: &Path,
        options: &IsoOptions,
    ) -> Result<PathBuf, IsoError>;

    fn platform(&self) -> HostPlatform;
}

pub fn create_host(platform: HostPlatform) -> Box<dyn IsoHostCap> {
    match platform {
        HostPlatform::Darwin => Box::new(darwin::DarwinIso),
        HostPlatform::Linux => Box::new(linux::LinuxIso),
        HostPlatform::Windows => Box::new(windows::WindowsIso),
    }
}
