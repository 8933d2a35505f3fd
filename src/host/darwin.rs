use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{HostPlatform, IsoHostCap};
use crate::env::HostEnv;
use crate::iso::builder::path_arg;
use crate::iso::{run_iso_build, IsoError, IsoOptions};

const BUILD_ISO_CMD: &str = "hdiutil";

/// macOS: `hdiutil makehybrid` producing an HFS/ISO 9660/Joliet hybrid.
pub struct DarwinIso;

impl DarwinIso {
    fn iso_args(source: &Path, destination: &Path, volume_id: Option<&str>) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["makehybrid", "-hfs", "-iso", "-joliet", "-ov"]
            .iter()
            .map(OsString::from)
            .collect();

        if let Some(volume_id) = volume_id {
            args.push("-default-volume-name".into());
            args.push(volume_id.into());
        }

        args.push("-o".into());
        args.push(path_arg(destination));
        args.push(path_arg(source));
        args
    }
}

impl IsoHostCap for DarwinIso {
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
        HostPlatform::Darwin
    }
}
