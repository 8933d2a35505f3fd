use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{HostPlatform, IsoHostCap};
use crate::env::HostEnv;
use crate::iso::builder::path_arg;
use crate::iso::{run_iso_build, IsoError, IsoOptions};

const BUILD_ISO_CMD: &str = "oscdimg";

/// Windows: `oscdimg` from the Windows ADK.
pub struct WindowsIso;

impl WindowsIso {
    // oscdimg takes the source before the target and glues the label to -l
    fn iso_args(source: &Path, destination: &Path, volume_id: Option<&str>) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-j1".into(), "-o".into(), "-m".into()];

        if let Some(volume_id) = volume_id {
            args.push(format!("-l{}", volume_id).into());
        }

        args.push(path_arg(source));
        args.push(path_arg(destination));
        args
    }
}

impl IsoHostCap for WindowsIso {
    fn isofs_available(&self, env: &HostEnv) -> bool {
        let found = env.resolver().which(BUILD_ISO_CMD);
        debug!("{} lookup: {:?}", BUILD_ISO_CMD, found);
        found.is_some()
    }

    fn create_iso(
        &self,
        env: &HostEnv,
        source: &Path,
        options: &IsoOptions,
    ) -> Result<PathBuf, IsoError> {
        run_iso_build(env, BUILD_ISO_CMD, source, options, |destination| {
            Self::iso_args(source, destination, options.volume_id.as_deref())
        })
    }

    fn platform(&self) -> HostPlatform {
        HostPlatform::Windows
    }
}
