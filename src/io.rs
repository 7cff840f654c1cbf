//! Whole-file loading and writing.
//!
//! Each input is read exactly once, in full, before any scanning happens.

use bytes::Bytes;
use std::path::Path;
use tracing::debug;

use crate::builder::SourceImage;
use crate::config::IngestLimits;
use crate::error::{ContainerError, Result};
use crate::types::ImageFormat;

/// Format declared by a path's extension.
pub fn declared_format(path: &Path) -> ImageFormat {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(ImageFormat::from_extension)
        .unwrap_or(ImageFormat::Unknown)
}

/// Loads a source image, enforcing the size ceiling and the accepted types.
pub async fn load_source(path: &Path, limits: &IngestLimits) -> Result<SourceImage> {
    let declared = declared_format(path);
    if !limits.accepts(declared) {
        return Err(ContainerError::UnsupportedSource {
            path: path.to_path_buf(),
        });
    }

    let bytes = read_checked(path, limits).await?;
    Ok(SourceImage::new(bytes, declared.mime_type()))
}

/// Loads a container of any name, enforcing the size ceiling.
pub async fn load_container(path: &Path, limits: &IngestLimits) -> Result<Bytes> {
    read_checked(path, limits).await
}

async fn read_checked(path: &Path, limits: &IngestLimits) -> Result<Bytes> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ContainerError::io(path, e))?;

    let size = metadata.len();
    if size > limits.max_input_bytes {
        return Err(ContainerError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            limit: limits.max_input_bytes,
        });
    }

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| ContainerError::io(path, e))?;

    if data.is_empty() {
        return Err(ContainerError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), size = data.len(), "loaded");
    Ok(Bytes::from(data))
}

/// Writes a payload, creating parent directories as needed.
pub async fn write_payload(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ContainerError::io(parent, e))?;
    }

    tokio::fs::write(path, data)
        .await
        .map_err(|e| ContainerError::io(path, e))?;

    debug!(path = %path.display(), size = data.len(), "written");
    Ok(())
}
