//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// playmatch - Match abstract playlists against a local music library
///
/// Reads a JSON playlist of title/artist/album records, guesses which file
/// under the search paths each entry corresponds to using fuzzy matching,
/// lets you confirm the uncertain guesses, and writes an XSPF or JSON
/// playlist with resolved file locations.
#[derive(Parser, Debug)]
#[command(name = "playmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Input playlist (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Music library root to search (repeatable, at least one required)
    #[arg(short, long = "search", value_name = "DIR", required = true)]
    pub search: Vec<PathBuf>,

    /// Output path (defaults to the input path with the format's extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "xspf")]
    #[arg(value_parser = ["xspf", "json"])]
    pub format: String,

    /// Number of worker threads (defaults to CPU count - 1)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Accept all low-confidence guesses without prompting
    #[arg(long, default_value = "false")]
    pub no_input: bool,

    /// Dry run - show the discovered library and playlist without matching
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress bars)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the effective output path: the explicit one, or the input path
    /// with the format's extension
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension(extension))
    }

    /// Get the log level based on verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
