pub mod builder;
pub mod error;
pub mod options;
pub mod output;

pub use builder::run_iso_build;
pub use error::IsoError;
pub use options::IsoOptions;
