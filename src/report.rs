//! Presentation-neutral summary of an analysis, for text or JSON output.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;

use crate::types::{AnalysisReport, ImageFormat};

#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub index: usize,
    pub format: ImageFormat,
    pub mime_type: &'static str,
    pub start: usize,
    pub end: usize,
    pub len: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub source: String,
    pub total_len: usize,
    pub is_composite: bool,
    pub verdict: String,
    pub regions: Vec<RegionSummary>,
}

impl AnalysisSummary {
    /// Summarizes `report`, hashing each region of `data`.
    pub fn new(source: impl Into<String>, data: &[u8], report: &AnalysisReport) -> Self {
        let regions = report
            .regions()
            .iter()
            .map(|r| RegionSummary {
                index: r.index,
                format: r.format,
                mime_type: r.format.mime_type(),
                start: r.start,
                end: r.end,
                len: r.len(),
                sha256: data
                    .get(r.range())
                    .map(|bytes| hex::encode(Sha256::digest(bytes)))
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            source: source.into(),
            total_len: report.total_len(),
            is_composite: report.is_composite(),
            verdict: verdict(report),
            regions,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{} ({} bytes)", self.source, self.total_len);
        for r in &self.regions {
            let _ = writeln!(
                out,
                "  #{:<2} {:<5} {:>10} .. {:<10} {:>10} bytes  {}",
                r.index,
                r.format.name(),
                r.start,
                r.end,
                r.len,
                &r.sha256[..r.sha256.len().min(16)]
            );
        }
        let _ = writeln!(out, "  {}", self.verdict);

        out
    }
}

pub fn verdict(report: &AnalysisReport) -> String {
    match report.regions().len() {
        0 => "no image".to_string(),
        1 => "single image".to_string(),
        n => format!("composite ({} images)", n),
    }
}
