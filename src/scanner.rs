//! Signature scanning over an in-memory buffer.
//!
//! All functions are pure: the same buffer and offset always yield the same
//! answer.

use aho_corasick::Input;

use crate::signatures::{self, SIGNATURES};
use crate::types::{ImageFormat, Offset, SignatureMatch};

/// Minimum distance after a region start before the next signature is accepted.
///
/// Images shorter than this are merged into the region that follows them.
pub const MIN_GAP: usize = 1000;

/// Identifies the format whose prefix starts at `offset`, in table order.
pub fn detect_format_at(data: &[u8], offset: Offset) -> ImageFormat {
    let Some(window) = data.get(offset..) else {
        return ImageFormat::Unknown;
    };

    SIGNATURES
        .iter()
        .find(|sig| sig.matches(window))
        .map(|sig| sig.format)
        .unwrap_or(ImageFormat::Unknown)
}

/// Finds the first signature at or after `from`.
///
/// The lowest offset wins; at equal offsets the registry order decides.
pub fn find_signature(data: &[u8], from: Offset) -> Option<SignatureMatch> {
    if from >= data.len() {
        return None;
    }

    match signatures::matcher() {
        Some(ac) => ac
            .find(Input::new(data).range(from..))
            .map(|m| SignatureMatch::new(m.start(), SIGNATURES[m.pattern().as_usize()].format)),
        None => find_signature_linear(data, from),
    }
}

/// Position-by-position scan used when the automaton is unavailable.
fn find_signature_linear(data: &[u8], from: Offset) -> Option<SignatureMatch> {
    (from..data.len()).find_map(|pos| match detect_format_at(data, pos) {
        ImageFormat::Unknown => None,
        format => Some(SignatureMatch::new(pos, format)),
    })
}

/// Finds the start of the region following one that begins at `after`,
/// skipping `min_gap` bytes so that signature-like bytes inside the current
/// image's payload are not mistaken for a new header.
pub fn find_next_region_start(data: &[u8], after: Offset, min_gap: usize) -> Option<SignatureMatch> {
    find_signature(data, after.saturating_add(min_gap))
}
