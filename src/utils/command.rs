use anyhow::{Context, Result};
use std::ffi::OsString;
use std::process::Command;
use tracing::debug;

/// Exit status and captured output of a finished subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an external program to completion and captures its output.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn execute(&self, program: &str, args: Vec<OsString>) -> Result<ExecOutcome>;
}

/// Blocking runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn execute(&self, program: &str, args: Vec<OsString>) -> Result<ExecOutcome> {
        debug!("Executing: {} {:?}", program, args);

        let output = Command::new(program)
            .args(&args)
            .output()
            .with_context(|| format!("Failed to execute {}", program))?;

        // Killed by a signal: there is no exit code to report
        let exit_code = output.status.code().unwrap_or(-1);
        debug!("{} exited with code {}", program, exit_code);

        Ok(ExecOutcome {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
