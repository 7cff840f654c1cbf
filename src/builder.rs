//! Container assembly.
//!
//! A container is the byte-wise concatenation of its parts with no header,
//! index or separator. The result carries the content type declared by the
//! first source, whatever the second one actually is.

use bytes::{Bytes, BytesMut};
use std::fmt;
use tracing::{info, warn};

use crate::scanner::detect_format_at;
use crate::types::ImageFormat;

/// An image loaded into memory along with the content type it was declared as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub bytes: Bytes,
    pub declared_type: String,
}

impl SourceImage {
    pub fn new(bytes: impl Into<Bytes>, declared_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            declared_type: declared_type.into(),
        }
    }

    /// Declares the content type from the detected format.
    pub fn sniffed(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let declared_type = detect_format_at(&bytes, 0).mime_type().to_string();
        Self {
            bytes,
            declared_type,
        }
    }

    pub fn detected_format(&self) -> ImageFormat {
        detect_format_at(&self.bytes, 0)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::First => write!(f, "first"),
            Slot::Second => write!(f, "second"),
        }
    }
}

/// Non-fatal findings raised while building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildWarning {
    UnknownFormat { slot: Slot },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::UnknownFormat { slot } => {
                write!(f, "{} image has an unrecognized format; concatenated anyway", slot)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltContainer {
    pub bytes: Bytes,
    /// Content type of the first source
    pub content_type: String,
    pub first_format: ImageFormat,
    pub second_format: ImageFormat,
    /// Length of the first part, i.e. where the second part begins
    pub split_at: usize,
    pub warnings: Vec<BuildWarning>,
}

impl BuiltContainer {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Concatenates `first` and `second` into a new container.
pub fn build(first: &SourceImage, second: &SourceImage) -> BuiltContainer {
    let first_format = first.detected_format();
    let second_format = second.detected_format();

    let mut warnings = Vec::new();
    for (slot, format) in [(Slot::First, first_format), (Slot::Second, second_format)] {
        if !format.is_known() {
            warn!(%slot, "unknown image format, continuing");
            warnings.push(BuildWarning::UnknownFormat { slot });
        }
    }

    let mut buf = BytesMut::with_capacity(first.len() + second.len());
    buf.extend_from_slice(&first.bytes);
    buf.extend_from_slice(&second.bytes);
    let bytes = buf.freeze();

    info!(
        total = bytes.len(),
        first = %first_format,
        second = %second_format,
        split_at = first.len(),
        "container built"
    );

    BuiltContainer {
        bytes,
        content_type: first.declared_type.clone(),
        first_format,
        second_format,
        split_at: first.len(),
        warnings,
    }
}
