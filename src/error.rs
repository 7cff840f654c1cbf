use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, inspecting or slicing a container buffer
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("No recognizable image signature in {len} bytes")]
    NoSignatureFound { len: usize },

    #[error("File is empty: {}", path.display())]
    EmptyInput { path: PathBuf },

    #[error("File {} is {size} bytes, limit is {limit}", path.display())]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Not an accepted image type: {}", path.display())]
    UnsupportedSource { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ContainerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContainerError>;
