use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::base::BaseDirectory;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Base directory '{0}' is not supported inside group containers")]
    UnsupportedBaseDirectory(BaseDirectory),

    #[error("No shared container for group identifier '{0}'")]
    InvalidGroupId(String),

    #[error("Platform directory '{0}' is unavailable")]
    PlatformDirectoryUnavailable(BaseDirectory),

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
