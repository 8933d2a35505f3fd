use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional knobs for a single ISO build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoOptions {
    /// Where to write the image. A path ending in `.iso` is used as-is; any
    /// other path is a directory that receives a generated
    /// `<token>_vagrant.iso`. When absent a unique temporary path is used.
    #[serde(default)]
    pub file_destination: Option<PathBuf>,

    /// Volume label written into the image metadata.
    #[serde(default)]
    pub volume_id: Option<String>,
}

impl IsoOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_destination = Some(path.into());
        self
    }

    pub fn with_volume_id(mut self, volume_id: impl Into<String>) -> Self {
        self.volume_id = Some(volume_id.into());
        self
    }
}
