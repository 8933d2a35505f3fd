use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filesystem operations the ISO builder needs from the host.
#[cfg_attr(test, mockall::automock)]
pub trait HostFs: Send + Sync {
    /// Create `path` and any missing ancestors. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Allocate a uniquely named `.iso` file, delete it and return its path.
    fn temp_file_path(&self) -> Result<PathBuf>;
}

#[derive(Debug)]
pub struct LocalFs {
    temp_dir: PathBuf,
}

impl LocalFs {
    pub fn new() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
        }
    }

    pub fn with_temp_dir(temp_dir: PathBuf) -> Self {
        Self { temp_dir }
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl HostFs for LocalFs {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        debug!("Ensuring directory exists: {}", path.display());
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    fn temp_file_path(&self) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix("vagrant")
            .suffix(".iso")
            .tempfile_in(&self.temp_dir)
            .with_context(|| {
                format!(
                    "Failed to create temporary file in {}",
                    self.temp_dir.display()
                )
            })?;

        let path = file.path().to_path_buf();
        file.close()
            .with_context(|| format!("Failed to delete temporary file: {}", path.display()))?;

        debug!("Allocated temporary ISO path: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_path_is_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::with_temp_dir(dir.path().to_path_buf());

        let path = fs.temp_file_path().unwrap();
        assert!(!path.exists());
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(path.extension().and_then(|s| s.to_str()), Some("iso"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("vagrant"));
    }

    #[test]
    fn test_temp_file_paths_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::with_temp_dir(dir.path().to_path_buf());

        assert_ne!(fs.temp_file_path().unwrap(), fs.temp_file_path().unwrap());
    }

    #[test]
    fn test_create_dir_all_tolerates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let fs = LocalFs::new();

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_dir_all_fails_under_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, b"x").unwrap();

        let err = LocalFs::new().create_dir_all(&file.join("sub")).unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
    }
}
