use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use console::style;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use veil::cli::{Cli, Commands};
use veil::extraction::suggested_filename;
use veil::report::AnalysisSummary;
use veil::{IngestLimits, ScanOptions, analyze_with, build, extract_first_with, extract_hidden_with, io};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.tuning.scan_options();
    let limits = cli.tuning.ingest_limits();

    match cli.command {
        Commands::Build {
            first,
            second,
            output,
        } => run_build(&first, &second, &output, &limits).await,
        Commands::Analyze { files, json } => run_analyze(files, json, &options, &limits).await,
        Commands::Extract {
            file,
            hidden,
            output,
        } => run_extract(&file, hidden, output, &options, &limits).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "veil=debug" } else { "veil=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_build(
    first: &Path,
    second: &Path,
    output: &Path,
    limits: &IngestLimits,
) -> Result<ExitCode> {
    let a = io::load_source(first, limits)
        .await
        .with_context(|| format!("Failed to read first image {:?}", first))?;
    let b = io::load_source(second, limits)
        .await
        .with_context(|| format!("Failed to read second image {:?}", second))?;

    println!("First:  {:?} ({}, {} bytes)", first, a.detected_format(), a.len());
    println!("Second: {:?} ({}, {} bytes)", second, b.detected_format(), b.len());

    let built = build(&a, &b);
    for warning in &built.warnings {
        println!("[!] {}", style(warning).yellow());
    }

    io::write_payload(output, &built.bytes)
        .await
        .with_context(|| format!("Failed to write container {:?}", output))?;

    println!();
    println!("{}", style("Container created").green().bold());
    println!("Output:       {:?}", output);
    println!("Content type: {}", built.content_type);
    println!("Total size:   {} bytes", built.len());
    println!("Visible:      0 .. {}", built.split_at);
    println!("Hidden:       {} .. {}", built.split_at, built.len());

    Ok(ExitCode::SUCCESS)
}

async fn run_analyze(
    files: Vec<PathBuf>,
    json: bool,
    options: &ScanOptions,
    limits: &IngestLimits,
) -> Result<ExitCode> {
    let mut loaded: Vec<(PathBuf, Bytes)> = Vec::with_capacity(files.len());
    for path in files {
        let data = io::load_container(&path, limits)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;
        loaded.push((path, data));
    }

    let options = *options;
    let summaries: Vec<AnalysisSummary> = tokio::task::spawn_blocking(move || {
        loaded
            .par_iter()
            .map(|(path, data)| {
                let report = analyze_with(data, &options);
                AnalysisSummary::new(path.display().to_string(), data, &report)
            })
            .collect()
    })
    .await
    .context("Analysis task failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            print!("{}", summary.render_text());
        }
    }

    if summaries.iter().all(|s| s.regions.is_empty()) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_extract(
    file: &Path,
    hidden: bool,
    output: Option<PathBuf>,
    options: &ScanOptions,
    limits: &IngestLimits,
) -> Result<ExitCode> {
    let container = io::load_container(file, limits)
        .await
        .with_context(|| format!("Failed to read {:?}", file))?;

    let (index, image) = if hidden {
        match extract_hidden_with(&container, options)? {
            Some(image) => (2, image),
            None => {
                println!("[!] {}", style("No hidden image found").yellow());
                println!("This may not be a container, or the hidden image format is not supported.");
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        (1, extract_first_with(&container, options)?)
    };

    let output = output.unwrap_or_else(|| PathBuf::from(suggested_filename(index, image.format)));
    io::write_payload(&output, &image.bytes)
        .await
        .with_context(|| format!("Failed to write {:?}", output))?;

    println!(
        "{} {} image ({}) at {} .. {}",
        style("Extracted").green().bold(),
        image.format,
        image.mime_type(),
        image.start,
        image.end
    );
    println!("Output: {:?} ({} bytes)", output, image.len());

    Ok(ExitCode::SUCCESS)
}
