use thiserror::Error;

#[derive(Debug, Error)]
pub enum IsoError {
    /// The disk-image tool ran and exited non-zero.
    #[error("ISO build failed: `{command}` exited with code {exit_code}\nstdout: {stdout}\nstderr: {stderr}")]
    BuildFailed {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// A host collaborator failed before or while launching the tool.
    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

impl IsoError {
    pub fn is_build_failure(&self) -> bool {
        matches!(self, IsoError::BuildFailed { .. })
    }
}
