pub mod command;
pub mod fs;
pub mod which;

pub use command::{CommandRunner, ExecOutcome, SystemCommandRunner};
pub use fs::{HostFs, LocalFs};
pub use which::{ExecutableResolver, PathResolver};
