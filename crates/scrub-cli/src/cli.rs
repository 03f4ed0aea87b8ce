use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Redact keywords and sensitive patterns from a transcript", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transcript file to redact
    pub transcript: Option<PathBuf>,

    /// Keyword file, one literal keyword per line
    #[arg(default_value = "keywords.txt")]
    pub keywords: PathBuf,
}
