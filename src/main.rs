//! playmatch CLI entry point

use clap::Parser;
use playmatch::config::{Cli, Settings};
use playmatch::pipeline;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli);

    // Build settings from CLI
    let settings = Settings::from_cli(&cli);

    // Validate inputs
    if let Err(e) = validate_inputs(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Run the pipeline
    match pipeline::run(&settings) {
        Ok(result) => {
            println!();
            if settings.dry_run {
                println!("Dry run over {} entries, nothing written", result.total_entries);
            } else {
                println!(
                    "Summary: {} entries, {} matched confidently, {} flagged for review",
                    result.total_entries, result.confident, result.flagged
                );
                println!("Wrote {}", settings.output.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if cli.quiet { "error" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn validate_inputs(cli: &Cli) -> Result<(), String> {
    // Check playlist exists
    if !cli.input.exists() {
        return Err(format!(
            "Input playlist does not exist: {}\n\n  Tip: Check the path is correct and accessible.\n  Example:\n    playmatch -i ~/playlists/mix.json -s ~/Music",
            cli.input.display()
        ));
    }

    // Check every search root is a directory
    for root in &cli.search {
        if !root.is_dir() {
            return Err(format!(
                "Search path is not a directory: {}\n\n  Tip: Each -s path should be a music library root\n  containing one subdirectory per album.",
                root.display()
            ));
        }
    }

    Ok(())
}
