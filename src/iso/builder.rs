use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::IsoError;
use super::options::IsoOptions;
use super::output::resolve_destination;
use crate::env::HostEnv;

/// Resolve the destination, run `program` once with the arguments produced
/// by `build_args` for that destination, and check the exit code.
pub fn run_iso_build<F>(
    env: &HostEnv,
    program: &str,
    source: &Path,
    options: &IsoOptions,
    build_args: F,
) -> Result<PathBuf, IsoError>
where
    F: FnOnce(&Path) -> Vec<OsString>,
{
    let destination = resolve_destination(env.fs(), options.file_destination.as_deref())?;
    let args = build_args(&destination);

    let command = std::iter::once(program.to_string())
        .chain(args.iter().map(|arg| arg.to_string_lossy().into_owned()))
        .collect::<Vec<_>>()
        .join(" ");
    debug!("Building ISO from {}: {}", source.display(), command);

    let outcome = env.runner().execute(program, args)?;
    if !outcome.success() {
        return Err(IsoError::BuildFailed {
            command,
            exit_code: outcome.exit_code,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
        });
    }

    info!("Created ISO: {}", destination.display());
    Ok(destination)
}

/// Paths go to the tool byte for byte, never through a lossy UTF-8 conversion.
pub(crate) fn path_arg(path: &Path) -> OsString {
    path.as_os_str().to_os_string()
}
