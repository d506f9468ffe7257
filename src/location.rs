//! Storage locations and their resolution to concrete paths.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::base::BaseDirectory;
use crate::container;
use crate::error::{Result, StorageError};
use crate::launch;

/// A description of where data should live on disk.
///
/// Resolution is pure path computation: [`StorageLocation::resolve`] never
/// creates or mutates anything, and resolving the same value twice within
/// one process launch yields the same path.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageLocation {
    /// A caller-supplied absolute path, used as-is.
    Explicit { path: PathBuf },

    /// A chain of subfolders under a per-user platform base directory.
    Named {
        folders: Vec<String>,
        #[serde(default)]
        base: BaseDirectory,
    },

    /// A chain of subfolders under scratch space owned by the current
    /// process launch; the next launch's sweep deletes it (see
    /// [`crate::notify_launch`]).
    DeleteOnLaunch { folders: Vec<String> },

    /// A chain of subfolders under the shared app-group container for
    /// `group_id`. Only `Caches`, `Library` and `ApplicationSupport`
    /// bases are valid here.
    GroupContainer {
        folders: Vec<String>,
        group_id: String,
        #[serde(default)]
        base: BaseDirectory,
    },
}

impl StorageLocation {
    /// Computes the absolute directory path this location describes.
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            Self::Explicit { path } => Ok(path.clone()),
            Self::Named { folders, base } => {
                let root = base
                    .resolve()
                    .ok_or(StorageError::PlatformDirectoryUnavailable(*base))?;
                Ok(join_folders(root, folders))
            }
            Self::DeleteOnLaunch { folders } => {
                Ok(join_folders(launch::launch_scratch_dir(), folders))
            }
            Self::GroupContainer {
                folders,
                group_id,
                base,
            } => {
                // Validate the base kind before any filesystem access.
                let subdir = container::library_subdir(*base)?;
                let root = container::group_container_dir(group_id)
                    .ok_or_else(|| StorageError::InvalidGroupId(group_id.clone()))?;
                let mut dir = root.join("Library");
                if let Some(subdir) = subdir {
                    dir.push(subdir);
                }
                Ok(join_folders(dir, folders))
            }
        }
    }

    /// Resolves the location, ensures the directory exists, and returns the
    /// path of `name` inside it (with `.extension` appended when
    /// `extension` is non-empty).
    ///
    /// When something other than a directory sits at the resolved path it is
    /// removed best-effort before the directory is created; only the
    /// creation failure itself surfaces as an error.
    pub fn file_path(&self, name: &str, extension: &str) -> Result<PathBuf> {
        let dir = self.resolve()?;
        ensure_dir(&dir)?;
        if extension.is_empty() {
            Ok(dir.join(name))
        } else {
            Ok(dir.join(format!("{name}.{extension}")))
        }
    }
}

fn join_folders(mut dir: PathBuf, folders: &[String]) -> PathBuf {
    for folder in folders {
        dir.push(folder);
    }
    dir
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    // `is_dir` follows symlinks; look at the entry itself before replacing it.
    if dir.symlink_metadata().is_ok() {
        let _ = fs::remove_file(dir);
    }
    fs::create_dir_all(dir).map_err(|source| StorageError::DirectoryCreationFailed {
        path: dir.to_path_buf(),
        source,
    })
}
