//! Build ISO images on the current host by driving its native disk-image
//! tool (`hdiutil` on macOS, `mkisofs`/`genisoimage` on Linux, `oscdimg`
//! on Windows).
//!
//! ```no_run
//! use isocap::{create_host, HostEnv, HostPlatform, IsoOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), isocap::IsoError> {
//! let host = create_host(HostPlatform::detect().unwrap_or(HostPlatform::Linux));
//! let env = HostEnv::system();
//! if host.isofs_available(&env) {
//!     let options = IsoOptions::new().with_volume_id("cidata");
//!     let iso = host.create_iso(&env, Path::new("./seed"), &options)?;
//!     println!("{}", iso.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod host;
pub mod iso;
pub mod utils;

pub use env::HostEnv;
pub use host::{create_host, HostPlatform, IsoHostCap};
pub use iso::{IsoError, IsoOptions};
