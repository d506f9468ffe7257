use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Per-user platform directory kinds a storage location can be rooted under.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDirectory {
    /// Disposable cached data (~/.cache on Linux, ~/Library/Caches on macOS).
    #[default]
    Caches,
    /// The user library root (~/Library on macOS, the local data directory elsewhere).
    Library,
    /// Persistent per-application data (~/Library/Application Support on macOS).
    ApplicationSupport,
    /// The user's documents directory.
    Documents,
    /// The user's downloads directory.
    Downloads,
}

impl BaseDirectory {
    /// Resolve to the platform's per-user directory of this kind.
    ///
    /// Returns `None` when the platform cannot supply the directory
    /// (e.g. no home directory in the current environment).
    pub fn resolve(self) -> Option<PathBuf> {
        match self {
            Self::Caches => dirs::cache_dir(),
            Self::Library => library_dir(),
            Self::ApplicationSupport => dirs::data_dir(),
            Self::Documents => dirs::document_dir(),
            Self::Downloads => dirs::download_dir(),
        }
    }
}

impl fmt::Display for BaseDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Caches => "caches",
            Self::Library => "library",
            Self::ApplicationSupport => "application support",
            Self::Documents => "documents",
            Self::Downloads => "downloads",
        };
        f.write_str(name)
    }
}

#[cfg(target_os = "macos")]
fn library_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Library"))
}

#[cfg(not(target_os = "macos"))]
fn library_dir() -> Option<PathBuf> {
    dirs::data_local_dir()
}
