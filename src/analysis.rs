use tracing::{debug, info};

use crate::config::ScanOptions;
use crate::scanner::{find_next_region_start, find_signature};
use crate::types::{AnalysisReport, ImageRegion};

/// Partitions `data` into image regions using the default options.
pub fn analyze(data: &[u8]) -> AnalysisReport {
    analyze_with(data, &ScanOptions::default())
}

/// Partitions `data` into image regions.
///
/// Each region runs from a signature to the next signature found at least
/// `min_gap` bytes later, or to the end of the buffer. At most
/// `max_regions` regions are reported; anything after that is ignored.
pub fn analyze_with(data: &[u8], options: &ScanOptions) -> AnalysisReport {
    let mut regions = Vec::new();
    let mut search_pos = 0;

    while search_pos < data.len() {
        if regions.len() >= options.max_regions() {
            debug!(max = options.max_regions(), search_pos, "region cap reached");
            break;
        }

        let Some(sig) = find_signature(data, search_pos) else {
            break;
        };

        let end = find_next_region_start(data, sig.offset, options.min_gap())
            .map(|next| next.offset)
            .unwrap_or(data.len());

        let region = ImageRegion::new(regions.len() + 1, sig.format, sig.offset, end);
        debug!(
            index = region.index,
            format = %region.format,
            start = region.start,
            end = region.end,
            "found region"
        );
        regions.push(region);

        search_pos = end;
    }

    let report = AnalysisReport::new(data.len(), regions);
    info!(
        total = report.total_len(),
        regions = report.regions().len(),
        composite = report.is_composite(),
        "analysis complete"
    );
    report
}
