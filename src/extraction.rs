use bytes::Bytes;
use tracing::debug;

use crate::config::ScanOptions;
use crate::error::{ContainerError, Result};
use crate::scanner::{find_next_region_start, find_signature};
use crate::types::{ExtractedImage, ImageFormat, Offset, SignatureMatch};

/// Slices out the first image of a container.
pub fn extract_first(container: &Bytes) -> Result<ExtractedImage> {
    extract_first_with(container, &ScanOptions::default())
}

pub fn extract_first_with(container: &Bytes, options: &ScanOptions) -> Result<ExtractedImage> {
    let first = first_signature(container)?;
    Ok(slice_region(container, first, options.min_gap()))
}

/// Slices out the first image that follows the visible one.
///
/// `Ok(None)` means the container holds a valid image but nothing after it,
/// which is an ordinary outcome rather than a failure.
pub fn extract_hidden(container: &Bytes) -> Result<Option<ExtractedImage>> {
    extract_hidden_with(container, &ScanOptions::default())
}

pub fn extract_hidden_with(
    container: &Bytes,
    options: &ScanOptions,
) -> Result<Option<ExtractedImage>> {
    let first = first_signature(container)?;

    let Some(second) = find_next_region_start(container, first.offset, options.min_gap()) else {
        debug!(first = first.offset, "no hidden region");
        return Ok(None);
    };

    Ok(Some(slice_region(container, second, options.min_gap())))
}

fn first_signature(container: &[u8]) -> Result<SignatureMatch> {
    find_signature(container, 0).ok_or(ContainerError::NoSignatureFound {
        len: container.len(),
    })
}

fn slice_region(container: &Bytes, start: SignatureMatch, min_gap: usize) -> ExtractedImage {
    let end = region_end(container, start.offset, min_gap);

    debug!(
        format = %start.format,
        start = start.offset,
        end,
        "extracting region"
    );

    ExtractedImage {
        bytes: container.slice(start.offset..end),
        format: start.format,
        start: start.offset,
        end,
    }
}

/// Default output name for an extracted image, `extracted_image_<n>.<ext>`.
pub fn suggested_filename(index: usize, format: ImageFormat) -> String {
    format!("extracted_image_{}.{}", index, format.extension())
}

/// Exclusive end of the region starting at `start`: the next signature past
/// the gap, or the end of the container.
pub fn region_end(container: &[u8], start: Offset, min_gap: usize) -> Offset {
    find_next_region_start(container, start, min_gap)
        .map(|next| next.offset)
        .unwrap_or(container.len())
}
