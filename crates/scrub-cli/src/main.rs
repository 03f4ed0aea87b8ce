mod cli;

use anyhow::Result;
use clap::Parser;
use scrub_core::{Redactor, load_keywords};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    let Some(transcript) = cli.transcript else {
        println!("Usage: scrub <transcript.txt> [keywords.txt]");
        return Ok(ExitCode::from(1));
    };

    if !transcript.is_file() {
        println!("❌ File not found: {}", transcript.display());
        return Ok(ExitCode::from(1));
    }

    let keywords = load_keywords(&cli.keywords)?;
    if keywords.is_empty() {
        println!("⚠️ No keywords loaded. Continuing with pattern-based redaction only.");
    }
    debug!("loaded {} keywords from {}", keywords.len(), cli.keywords.display());

    let original = std::fs::read_to_string(&transcript)?;

    let redactor = Redactor::new(&keywords);
    let (redacted, redactions) = redactor.redact(&original);

    let output = output_path(&transcript);
    std::fs::write(&output, redacted)?;

    let total: usize = redactions.iter().map(|r| r.count).sum();
    println!(
        "✓ Redaction complete: {} ({} matches redacted)",
        output.display(),
        total
    );

    Ok(ExitCode::SUCCESS)
}

/// Derives the output path by replacing the first ".txt" occurrence in the
/// input path with ".redacted.txt". A path containing no ".txt" maps to
/// itself, so the input file is overwritten in place.
fn output_path(input: &Path) -> PathBuf {
    let raw = input.to_string_lossy();
    PathBuf::from(raw.replacen(".txt", ".redacted.txt", 1))
}
