//! Resolution of platform storage directories into concrete filesystem
//! locations.
//!
//! A [`StorageLocation`] describes where data should live (an explicit
//! path, a folder chain under a per-user base directory, per-launch scratch
//! space, or a shared app-group container) and resolves to an absolute
//! path without touching the filesystem. [`StorageLocation::file_path`]
//! additionally ensures the directory exists and returns a file path inside
//! it. [`notify_launch`] sweeps scratch directories left behind by previous
//! process launches; call it once from process start-up code.

mod base;
mod container;
mod error;
mod launch;
mod location;

pub use base::BaseDirectory;
pub use error::{Result, StorageError};
pub use launch::{launch_token, notify_launch};
pub use location::StorageLocation;
