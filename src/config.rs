//! Scan and ingestion options

use crate::scanner::MIN_GAP;
use crate::types::ImageFormat;

/// Maximum number of regions reported by a single analysis.
pub const MAX_REGIONS: usize = 10;

/// Largest file the loader accepts, in bytes.
pub const MAX_INPUT_BYTES: u64 = 50 * 1024 * 1024;

/// Options controlling how a container is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    min_gap: usize,
    max_regions: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_gap: MIN_GAP,
            max_regions: MAX_REGIONS,
        }
    }
}

impl ScanOptions {
    /// Sets the bytes skipped after a region start before looking for the
    /// next one. Never below 1, so every region moves the search forward.
    pub fn with_min_gap(mut self, min_gap: usize) -> Self {
        self.min_gap = min_gap.max(1);
        self
    }

    /// Analysis stops silently after this many regions.
    pub fn with_max_regions(mut self, max_regions: usize) -> Self {
        self.max_regions = max_regions;
        self
    }

    pub fn min_gap(&self) -> usize {
        self.min_gap
    }

    pub fn max_regions(&self) -> usize {
        self.max_regions
    }
}

/// Pre-checks applied before a file is handed to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestLimits {
    pub max_input_bytes: u64,
    /// Formats a source image may declare through its extension
    pub accepted: Vec<ImageFormat>,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: MAX_INPUT_BYTES,
            accepted: vec![
                ImageFormat::Png,
                ImageFormat::Jpeg,
                ImageFormat::Gif,
                ImageFormat::Bmp,
            ],
        }
    }
}

impl IngestLimits {
    pub fn with_max_mb(mut self, mb: u64) -> Self {
        self.max_input_bytes = mb.saturating_mul(1024 * 1024);
        self
    }

    pub fn accepts(&self, format: ImageFormat) -> bool {
        self.accepted.contains(&format)
    }
}
