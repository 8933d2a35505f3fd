use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Looks executables up on a search path.
#[cfg_attr(test, mockall::automock)]
pub trait ExecutableResolver: Send + Sync {
    fn which(&self, name: &str) -> Option<PathBuf>;
}

/// Resolves against `PATH`, or against an explicit list of directories.
#[derive(Debug, Default, Clone)]
pub struct PathResolver {
    search_path: Option<OsString>,
}

impl PathResolver {
    pub fn new() -> Self {
        Self { search_path: None }
    }

    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn candidates(name: &str) -> Vec<String> {
        #[cfg(windows)]
        {
            if Path::new(name).extension().is_some() {
                return vec![name.to_string()];
            }
            let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT".to_string());
            exts.split(';')
                .filter(|ext| !ext.is_empty())
                .map(|ext| format!("{}{}", name, ext.to_lowercase()))
                .collect()
        }

        #[cfg(not(windows))]
        {
            vec![name.to_string()]
        }
    }
}

impl ExecutableResolver for PathResolver {
    fn which(&self, name: &str) -> Option<PathBuf> {
        let path = match &self.search_path {
            Some(path) => path.clone(),
            None => std::env::var_os("PATH")?,
        };

        for dir in std::env::split_paths(&path) {
            for candidate in Self::candidates(name) {
                let full = dir.join(candidate);
                if is_executable(&full) {
                    return Some(full);
                }
            }
        }
        None
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
