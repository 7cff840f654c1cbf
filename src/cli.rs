//! CLI commands using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{IngestLimits, MAX_INPUT_BYTES, MAX_REGIONS, ScanOptions};
use crate::scanner::MIN_GAP;

/// Veil - hide one image behind another
///
/// Builds containers by concatenating two images and recovers the visible or
/// hidden image from them by scanning for magic bytes.
#[derive(Parser)]
#[command(name = "veil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub tuning: Tuning,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Concatenate two images into one container
    Build {
        /// Visible image
        first: PathBuf,

        /// Hidden image
        second: PathBuf,

        /// Container to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the image regions of one or more containers
    Analyze {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Extract the visible image, or the hidden one with --hidden
    Extract {
        file: PathBuf,

        /// Extract the image after the visible one
        #[arg(short = 'm', long)]
        hidden: bool,

        /// Output path (default: extracted_image_<n>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct Tuning {
    /// Bytes skipped after a region start before the next signature counts
    #[arg(
        long,
        global = true,
        env = "VEIL_MIN_GAP",
        default_value_t = MIN_GAP as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub min_gap: u64,

    /// Maximum number of regions analysis reports
    #[arg(long, global = true, env = "VEIL_MAX_REGIONS", default_value_t = MAX_REGIONS)]
    pub max_regions: usize,

    /// Largest accepted input, in MiB
    #[arg(long, global = true, env = "VEIL_MAX_INPUT_MB", default_value_t = MAX_INPUT_BYTES / (1024 * 1024))]
    pub max_input_mb: u64,
}

impl Tuning {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_min_gap(usize::try_from(self.min_gap).unwrap_or(usize::MAX))
            .with_max_regions(self.max_regions)
    }

    pub fn ingest_limits(&self) -> IngestLimits {
        IngestLimits::default().with_max_mb(self.max_input_mb)
    }
}
