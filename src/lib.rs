pub mod analysis;
pub mod builder;
pub mod cli;
pub mod config;
mod error;
pub mod extraction;
pub mod io;
pub mod report;
pub mod scanner;
pub mod signatures;
pub mod types;

pub use analysis::{analyze, analyze_with};
pub use builder::{BuildWarning, BuiltContainer, Slot, SourceImage, build};
pub use config::{IngestLimits, ScanOptions};
pub use error::{ContainerError, Result};
pub use extraction::{extract_first, extract_first_with, extract_hidden, extract_hidden_with};
pub use scanner::{MIN_GAP, detect_format_at, find_next_region_start, find_signature};
pub use types::{AnalysisReport, ExtractedImage, ImageFormat, ImageRegion, Offset, SignatureMatch};
