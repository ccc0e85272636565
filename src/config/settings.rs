//! Runtime configuration settings

use crate::export::Format;
use std::path::PathBuf;

/// Runtime settings for the matching pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    /// Input playlist path
    pub input: PathBuf,
    /// Music library roots to search
    pub search_paths: Vec<PathBuf>,
    /// Output playlist path
    pub output: PathBuf,
    /// Output format
    pub format: Format,
    /// Number of matching worker threads
    pub threads: usize,
    /// Prompt the operator for low-confidence matches
    pub interactive: bool,
    /// Show progress bars
    pub show_progress: bool,
    /// Dry run mode - show library and playlist without matching
    pub dry_run: bool,
}

impl Settings {
    /// Create settings from CLI arguments
    ///
    /// The format string was already validated by clap's value parser.
    pub fn from_cli(cli: &super::cli::Cli) -> Self {
        let format = Format::from_name(&cli.format).unwrap_or(Format::Xspf);

        let default_threads = num_cpus::get().saturating_sub(1).max(1);
        let threads = cli.threads.unwrap_or(default_threads);

        Self {
            input: cli.input.clone(),
            search_paths: cli.search.clone(),
            output: cli.output_path(format.extension()),
            format,
            threads,
            interactive: !cli.no_input,
            show_progress: !cli.quiet,
            dry_run: cli.dry_run,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./playlist.json"),
            search_paths: vec![PathBuf::from(".")],
            output: PathBuf::from("./playlist.xspf"),
            format: Format::Xspf,
            threads: num_cpus::get().saturating_sub(1).max(1),
            interactive: false,
            show_progress: false,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_derives_output_and_format() {
        let cli = super::super::Cli::parse_from([
            "playmatch",
            "-i",
            "/music/mix.playlist",
            "-s",
            "/music",
            "-f",
            "json",
            "--no-input",
        ]);
        let settings = Settings::from_cli(&cli);
        assert_eq!(settings.format, Format::Json);
        assert_eq!(settings.output, PathBuf::from("/music/mix.json"));
        assert!(!settings.interactive);
        assert!(settings.threads >= 1);
    }
}
