use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

pub type Offset = usize;

/// Image formats the registry can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Unknown,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Unknown => "bin",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Unknown => "application/octet-stream",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Unknown => "UNKNOWN",
        }
    }

    /// Guesses a format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> ImageFormat {
        match ext.to_ascii_lowercase().as_str() {
            "png" => ImageFormat::Png,
            "jpg" | "jpeg" | "jpe" => ImageFormat::Jpeg,
            "gif" => ImageFormat::Gif,
            "bmp" | "dib" => ImageFormat::Bmp,
            _ => ImageFormat::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != ImageFormat::Unknown
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A signature located by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureMatch {
    pub offset: Offset,
    pub format: ImageFormat,
}

impl SignatureMatch {
    pub fn new(offset: Offset, format: ImageFormat) -> Self {
        Self { offset, format }
    }
}

/// A contiguous byte range inferred to hold one embedded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRegion {
    /// 1-based position of the region in the container
    pub index: usize,
    pub format: ImageFormat,
    pub start: Offset,
    /// Exclusive
    pub end: Offset,
}

impl ImageRegion {
    pub fn new(index: usize, format: ImageFormat, start: Offset, end: Offset) -> Self {
        debug_assert!(start <= end);
        Self {
            index,
            format,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<Offset> {
        self.start..self.end
    }
}

/// Result of partitioning a container buffer into image regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    total_len: usize,
    regions: Vec<ImageRegion>,
}

impl AnalysisReport {
    pub fn new(total_len: usize, regions: Vec<ImageRegion>) -> Self {
        Self { total_len, regions }
    }

    pub fn total_len(&self) -> usize {
        self.total_len
    }

    pub fn regions(&self) -> &[ImageRegion] {
        &self.regions
    }

    /// True when more than one image was found.
    pub fn is_composite(&self) -> bool {
        self.regions.len() > 1
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// A payload sliced out of a container, tagged with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    pub bytes: Bytes,
    pub format: ImageFormat,
    pub start: Offset,
    pub end: Offset,
}

impl ExtractedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
