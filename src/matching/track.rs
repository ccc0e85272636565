//! Track candidate resolution
//!
//! Second stage of matching: inside the chosen album, pick the audio file
//! whose name is closest to the entry's title (or to "Artist - Title").
//! Ambiguity at this level is only reported, never re-resolved; there is no
//! further evidence to fall back on.

use crate::matching::{distance::levenshtein, title_variants, SCORE_MARGIN};
use crate::types::{AlbumCandidate, TrackCandidate};

/// Outcome of track resolution
///
/// `track` is `None` only when the album has no audio files at all; that is
/// the deterministic "no match" sentinel, never a panic or an abort.
#[derive(Debug)]
pub struct TrackDecision<'a> {
    pub track: Option<&'a TrackCandidate>,
    pub confident: bool,
}

/// Choose the best-matching track inside `album` for a playlist entry.
///
/// Ties keep the first-encountered candidate, so the result is
/// deterministic for a fixed input ordering.
pub fn resolve_track<'a>(
    title: &str,
    artist: &str,
    album: &'a AlbumCandidate,
) -> TrackDecision<'a> {
    let variants = title_variants(title, artist);

    let mut best: Option<(usize, &TrackCandidate)> = None;
    let mut second_score: Option<usize> = None;

    for candidate in &album.tracks {
        let score = variants
            .iter()
            .map(|variant| levenshtein(&candidate.name, variant))
            .min()
            .unwrap_or(usize::MAX);

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

    let Some((best_score, best_track)) = best else {
        return TrackDecision {
            track: None,
            confident: false,
        };
    };

    // A single track cannot be confused with a runner-up.
    let confident = match second_score {
        Some(second) => {
            let margin = best_track.name.chars().count() as f64 * SCORE_MARGIN;
            (second - best_score) as f64 > margin
        }
        None => true,
    };

    TrackDecision {
        track: Some(best_track),
        confident,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn album(name: &str, tracks: &[&str]) -> AlbumCandidate {
        AlbumCandidate {
            name: name.to_string(),
            location: PathBuf::from(format!("/music/{name}")),
            tracks: tracks
                .iter()
                .map(|t| TrackCandidate {
                    name: t.to_string(),
                    location: PathBuf::from(format!("/music/{name}/{t}.mp3")),
                })
                .collect(),
        }
    }

    #[test]
    fn test_exact_title_wins_confidently() {
        let album = album("greatest hits", &["song one", "completely different track"]);
        let decision = resolve_track("Song One", "X", &album);
        assert!(decision.confident);
        assert_eq!(decision.track.unwrap().name, "song one");
    }

    #[test]
    fn test_artist_dash_title_variant_matches() {
        let album = album("singles", &["the band - hit single", "some other file"]);
        let decision = resolve_track("Hit Single", "The Band", &album);
        assert!(decision.confident);
        assert_eq!(decision.track.unwrap().name, "the band - hit single");
    }

    #[test]
    fn test_similar_tracks_flagged_not_confident() {
        // "song one" and "song one!" differ by one edit; with a best score
        // of 0 and a runner-up of 1, the gap is within 8 * 0.125.
        let album = album("greatest hits", &["song one", "song one!"]);
        let decision = resolve_track("Song One", "X", &album);
        assert!(!decision.confident);
        assert_eq!(decision.track.unwrap().name, "song one");
    }

    #[test]
    fn test_single_track_is_trivially_confident() {
        let album = album("single", &["only track"]);
        let decision = resolve_track("Whatever Title", "X", &album);
        assert!(decision.confident);
        assert_eq!(decision.track.unwrap().name, "only track");
    }

    #[test]
    fn test_empty_album_returns_sentinel() {
        let album = album("empty", &[]);
        let decision = resolve_track("Song One", "X", &album);
        assert!(decision.track.is_none());
        assert!(!decision.confident);
    }
}
