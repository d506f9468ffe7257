//! Shared app-group container lookup.
//!
//! Containers are provisioned by the platform; this module only locates
//! them and never creates one.

use std::path::PathBuf;

use crate::base::BaseDirectory;
use crate::error::{Result, StorageError};

/// Environment variable overriding the group containers root.
/// Lets hosts without a native container concept (and tests) supply one.
const GROUP_CONTAINERS_ENV: &str = "STOWAGE_GROUP_CONTAINERS_DIR";

/// Returns the container directory for `group_id`, or `None` when the
/// identifier is invalid or no such container exists on disk.
pub(crate) fn group_container_dir(group_id: &str) -> Option<PathBuf> {
    if group_id.is_empty() || group_id.contains(['/', '\\']) {
        return None;
    }
    let container = containers_root()?.join(group_id);
    container.is_dir().then_some(container)
}

/// Maps a base-directory kind to the segment appended under the container's
/// `Library` directory. `Library` itself gets no extra segment; kinds outside
/// the supported set are a configuration error.
pub(crate) fn library_subdir(base: BaseDirectory) -> Result<Option<&'static str>> {
    match base {
        BaseDirectory::Library => Ok(None),
        BaseDirectory::Caches => Ok(Some("Caches")),
        BaseDirectory::ApplicationSupport => Ok(Some("Application Support")),
        other => Err(StorageError::UnsupportedBaseDirectory(other)),
    }
}

fn containers_root() -> Option<PathBuf> {
    if let Some(root) = non_empty_env(GROUP_CONTAINERS_ENV) {
        return Some(PathBuf::from(root));
    }
    platform_containers_root()
}

#[cfg(target_os = "macos")]
fn platform_containers_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Library").join("Group Containers"))
}

#[cfg(not(target_os = "macos"))]
fn platform_containers_root() -> Option<PathBuf> {
    None
}

/// Returns the value of an environment variable, treating empty strings as unset.
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
