//! Pipeline orchestration
//!
//! Coordinates playlist parsing, library discovery, parallel matching,
//! operator review, and export. Entries are independent of each other, so
//! matching runs across the rayon pool; results keep playlist order.

use crate::config::Settings;
use crate::discovery;
use crate::error::{PlaymatchError, Result};
use crate::export;
use crate::matching::{resolve_album, resolve_track};
use crate::playlist;
use crate::review;
use crate::types::{AlbumCandidate, MatchResult, PlaylistEntry, ResolvedEntry};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Pipeline result summary
#[derive(Debug)]
pub struct PipelineResult {
    pub total_entries: usize,
    pub confident: usize,
    pub flagged: usize,
}

/// Output of `match_all`: per-entry results in playlist order, plus the
/// indices of entries whose match needs human confirmation (also in
/// playlist order).
#[derive(Debug)]
pub struct MatchReport {
    pub results: Vec<MatchResult>,
    pub unconfident: Vec<usize>,
}

/// Match every playlist entry against the album candidates.
///
/// Fails up front when there are no candidates at all; no partial results
/// are produced in that case. Every returned result carries the best
/// available guess, confident or not.
pub fn match_all(entries: &[PlaylistEntry], albums: &[AlbumCandidate]) -> Result<MatchReport> {
    match_all_inner(entries, albums, None)
}

fn match_all_inner(
    entries: &[PlaylistEntry],
    albums: &[AlbumCandidate],
    progress: Option<&ProgressBar>,
) -> Result<MatchReport> {
    if albums.is_empty() {
        return Err(PlaymatchError::NoCandidates);
    }

    let results: Vec<MatchResult> = entries
        .par_iter()
        .map(|entry| {
            let result = match_entry(entry, albums);
            if let Some(pb) = progress {
                pb.inc(1);
                pb.set_message(entry.title.clone());
            }
            result
        })
        .collect();

    let unconfident = results
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.confident)
        .map(|(i, _)| i)
        .collect();

    Ok(MatchReport {
        results,
        unconfident,
    })
}

/// Resolve one entry: album stage, then track stage within the chosen album.
///
/// Precondition: `albums` is non-empty (checked by `match_all`).
fn match_entry(entry: &PlaylistEntry, albums: &[AlbumCandidate]) -> MatchResult {
    let Some(decision) = resolve_album(&entry.album, &entry.title, &entry.artist, albums) else {
        // Unreachable with a non-empty candidate set; still a guess-free
        // unconfident result rather than a panic.
        return MatchResult {
            location: None,
            confident: false,
        };
    };

    let album = decision.chosen();
    let track = resolve_track(&entry.title, &entry.artist, album);

    if track.track.is_none() {
        // Recoverable by design: this entry keeps a guess-free result while
        // the rest of the batch proceeds.
        let err = PlaymatchError::EmptyAlbumTrackSet {
            album: album.name.clone(),
        };
        debug_assert!(err.is_recoverable());
        warn!("No guess for '{}': {}", entry.title, err);
    }

    MatchResult {
        location: track.track.map(|t| t.location.clone()),
        confident: decision.is_confident() && track.confident,
    }
}

/// Run the full matching pipeline
pub fn run(settings: &Settings) -> Result<PipelineResult> {
    let pipeline_start = Instant::now();

    configure_thread_pool(settings.threads)?;

    // Phase 1: Inputs
    let playlist = playlist::load(&settings.input)?;
    let albums = discovery::scan(&settings.search_paths)?;

    if settings.dry_run {
        return run_dry_run(&playlist, &albums);
    }

    // Phase 2: Matching
    let match_start = Instant::now();
    let progress_bar = if settings.show_progress {
        let pb = ProgressBar::new(playlist.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let report = match_all_inner(&playlist.entries, &albums, progress_bar.as_ref())?;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Matching complete");
    }

    info!(
        "Matched {} entries in {:.2}s, {} flagged for review",
        playlist.len(),
        match_start.elapsed().as_secs_f64(),
        report.unconfident.len()
    );

    // Phase 3: Merge results back into plain records
    let mut resolved: Vec<ResolvedEntry> = playlist
        .entries
        .into_iter()
        .zip(report.results)
        .map(|(entry, result)| ResolvedEntry {
            entry,
            location: result.location,
            confident: result.confident,
        })
        .collect();

    // Phase 4: Operator review
    let flagged = report.unconfident.len();
    if flagged > 0 {
        if settings.interactive {
            review::review_unconfident(&mut resolved)?;
        } else {
            warn!(
                "{} entries were matched with low confidence, keeping best guesses",
                flagged
            );
        }
    }

    // Phase 5: Export
    export::write(&resolved, &settings.output, settings.format)?;

    info!(
        "Total pipeline time: {:.2}s",
        pipeline_start.elapsed().as_secs_f64()
    );

    Ok(PipelineResult {
        total_entries: resolved.len(),
        confident: resolved.len() - flagged,
        flagged,
    })
}

/// Dry run mode - show the discovered library and playlist without matching
fn run_dry_run(
    playlist: &playlist::Playlist,
    albums: &[AlbumCandidate],
) -> Result<PipelineResult> {
    println!();
    println!("=== DRY RUN MODE ===");
    println!();

    println!("Library: {} album directories", albums.len());
    for album in albums {
        println!("  {}/ ({} tracks)", album.name, album.tracks.len());
    }

    println!();
    println!(
        "Playlist: {} entries, {}s total",
        playlist.len(),
        playlist.total_duration()
    );
    for entry in &playlist.entries {
        println!("  {} - {} [{}]", entry.artist, entry.title, entry.album);
    }
    println!();

    Ok(PipelineResult {
        total_entries: playlist.len(),
        confident: 0,
        flagged: 0,
    })
}

/// Configure the Rayon thread pool
fn configure_thread_pool(num_threads: usize) -> Result<()> {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => {
            debug!("Configured thread pool with {} threads", num_threads);
        }
        Err(e) => {
            // If the pool is already initialized (e.g., in tests), that's OK
            if e.to_string().contains("already been initialized") {
                debug!("Thread pool already initialized, using existing pool");
            } else {
                return Err(PlaymatchError::ConfigError(format!(
                    "Failed to configure thread pool: {}",
                    e
                )));
            }
        }
    }
    Ok(())
}
