use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{HostPlatform, IsoHostCap};
use crate::env::HostEnv;
use crate::iso::builder::path_arg;
use crate::iso::{run_iso_build, IsoError, IsoOptions};

/// Tools tried in order; `genisoimage` is the Debian fork of `mkisofs`.
const BUILD_ISO_CMDS: [&str; 2] = ["mkisofs", "genisoimage"];

/// Linux: `mkisofs`/`genisoimage` producing an ISO 9660 image with
/// Joliet and Rock Ridge extensions.
pub struct LinuxIso;

impl LinuxIso {
    fn find_tool(env: &HostEnv) -> Option<&'static str> {
        BUILD_ISO_CMDS
            .iter()
            .copied()
            .find(|cmd| env.resolver().which(cmd).is_some())
    }

    fn iso_args(source: &Path, destination: &Path, volume_id: Option<&str>) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-joliet".into(), "-rock".into()];

        if let Some(volume_id) = volume_id {
            args.push("-volid".into());
            args.push(volume_id.into());
        }

        args.push("-o".into());
        args.push(path_arg(destination));
        args.push(path_arg(source));
        args
    }
}

impl IsoHostCap for LinuxIso {
    fn isofs_available(&self, env: &HostEnv) -> bool {
        let tool = Self::find_tool(env);
        debug!("ISO tool lookup: {:?}", tool);
        tool.is_some()
    }

    fn create_iso(
        &self,
        env: &HostEnv,
        source: &Path,
        options: &IsoOptions,
    ) -> Result<PathBuf, IsoError> {
        let program = Self::find_tool(env).unwrap_or_else(|| {
            warn!("Neither mkisofs nor genisoimage found on PATH, trying mkisofs");
            BUILD_ISO_CMDS[0]
        });

        run_iso_build(env, program, source, options, |destination| {
            Self::iso_args(source, destination, options.volume_id.as_deref())
        })
    }

    fn platform(&self) -> HostPlatform {
        HostPlatform::Linux
    }
}
