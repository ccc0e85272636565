//! Album candidate resolution
//!
//! First stage of matching: choose the album directory whose name is
//! closest to the entry's album tag. When the name-based choice is
//! ambiguous (the runner-up scores within the margin of the winner), every
//! album is re-scored by its most similar member track instead, and the
//! decision is flagged as not confident.

use crate::matching::{distance::levenshtein, title_variants, NEAR_EXACT_DISTANCE, SCORE_MARGIN};
use crate::types::AlbumCandidate;
use tracing::debug;

/// Outcome of album resolution
///
/// Tagged so the fallback path is visible to callers and testable on its
/// own, rather than collapsed into a bare boolean.
#[derive(Debug)]
pub enum AlbumDecision<'a> {
    /// Name-based scoring produced a clear winner
    Decisive(&'a AlbumCandidate),
    /// Name-based scoring was ambiguous; the winner was chosen by
    /// track-level evidence and needs human confirmation
    Ambiguous(&'a AlbumCandidate),
}

impl<'a> AlbumDecision<'a> {
    /// The chosen album, whichever way it was selected
    pub fn chosen(&self) -> &'a AlbumCandidate {
        match self {
            AlbumDecision::Decisive(album) | AlbumDecision::Ambiguous(album) => album,
        }
    }

    pub fn is_confident(&self) -> bool {
        matches!(self, AlbumDecision::Decisive(_))
    }
}

/// Choose the best-matching album for a playlist entry.
///
/// Returns `None` only when `candidates` is empty; the pipeline rejects
/// that case up front. Ties keep the first-encountered candidate, so the
/// result is deterministic for a fixed input ordering.
pub fn resolve_album<'a>(
    album: &str,
    title: &str,
    artist: &str,
    candidates: &'a [AlbumCandidate],
) -> Option<AlbumDecision<'a>> {
    let target = album.to_lowercase();

    let mut best: Option<(usize, &AlbumCandidate)> = None;
    let mut second_score: Option<usize> = None;

    for candidate in candidates {
        let score = levenshtein(&candidate.name, &target);
        match best {
            None => best = Some((score, candidate)),
            Some((best_score, _)) if score < best_score => {
                second_score = Some(best_score);
                best = Some((score, candidate));
            }
            Some(_) => {
                if second_score.is_none_or(|s| score < s) {
                    second_score = Some(score);
                }
            }
        }
    }

    let (best_score, best_album) = best?;

    // With a single candidate there is no runner-up to be confused with.
    if let Some(second) = second_score {
        let margin = target.chars().count() as f64 * SCORE_MARGIN;
        if best_score > NEAR_EXACT_DISTANCE && (second - best_score) as f64 <= margin {
            debug!(
                target_album = %target,
                best = %best_album.name,
                best_score,
                second,
                "Album name match ambiguous, re-scoring by track similarity"
            );
            return rescore_by_tracks(title, artist, candidates).map(AlbumDecision::Ambiguous);
        }
    }

    Some(AlbumDecision::Decisive(best_album))
}

/// Fallback scoring: each album is judged by its single most similar track.
///
/// Albums with no tracks at all score `usize::MAX` and can only win when no
/// alternative has any tracks either. Deliberately scans every track of
/// every candidate; it only runs on ambiguity, where name evidence has
/// already failed.
fn rescore_by_tracks<'a>(
    title: &str,
    artist: &str,
    candidates: &'a [AlbumCandidate],
) -> Option<&'a AlbumCandidate> {
    let variants = title_variants(title, artist);

    let mut best: Option<(usize, &AlbumCandidate)> = None;
    for candidate in candidates {
        let score = candidate
            .tracks
            .iter()
            .map(|track| {
                variants
                    .iter()
                    .map(|variant| levenshtein(&track.name, variant))
                    .min()
                    .unwrap_or(usize::MAX)
            })
            .min()
            .unwrap_or(usize::MAX);

        if best.is_none_or(|(best_score, _)| score < best_score) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}
