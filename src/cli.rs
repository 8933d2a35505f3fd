use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether the host's ISO tool is installed
    Available,
    /// Build an ISO image from a directory
    Build {
        /// Directory to pack into the image
        source: PathBuf,
        /// Output .iso file, or a directory to place a generated name in
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Volume label for the image
        #[arg(long)]
        volume_id: Option<String>,
    },
}
