//! Magic-byte signature registry.
//!
//! The table is fixed and order-significant: when two prefixes could match at
//! the same offset the earlier entry wins. The shortest prefix (BMP, two bytes)
//! is also the most likely to appear by chance inside compressed image data.

use aho_corasick::{AhoCorasick, MatchKind};
use std::sync::LazyLock;

use crate::types::ImageFormat;

/// A magic-byte prefix and the format it identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEntry {
    pub prefix: &'static [u8],
    pub format: ImageFormat,
}

impl SignatureEntry {
    pub const fn new(prefix: &'static [u8], format: ImageFormat) -> Self {
        Self { prefix, format }
    }

    /// Checks whether `data` starts with this entry's prefix.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.starts_with(self.prefix)
    }
}

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];
pub const GIF_SIGNATURE: [u8; 4] = [0x47, 0x49, 0x46, 0x38];
pub const BMP_SIGNATURE: [u8; 2] = [0x42, 0x4D];

pub static SIGNATURES: [SignatureEntry; 4] = [
    SignatureEntry::new(&PNG_SIGNATURE, ImageFormat::Png),
    SignatureEntry::new(&JPEG_SIGNATURE, ImageFormat::Jpeg),
    SignatureEntry::new(&GIF_SIGNATURE, ImageFormat::Gif),
    SignatureEntry::new(&BMP_SIGNATURE, ImageFormat::Bmp),
];

/// Leftmost-first automaton over [`SIGNATURES`]: the earliest offset wins,
/// and at equal offsets the pattern registered first wins, which is exactly
/// the table order.
static MATCHER: LazyLock<Option<AhoCorasick>> = LazyLock::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(SIGNATURES.iter().map(|s| s.prefix))
        .ok()
});

/// Returns the precompiled matcher, or `None` if it failed to build.
pub(crate) fn matcher() -> Option<&'static AhoCorasick> {
    MATCHER.as_ref()
}
