//! Fuzzy matching and disambiguation engine
//!
//! Resolution runs in two stages: pick the album directory whose name is
//! closest to the entry's album tag, then pick the closest track file inside
//! it. Both stages compare the best score against the runner-up; when the
//! gap is too small relative to the reference string length, the choice is
//! flagged as not confident. Album resolution additionally falls back to
//! track-level evidence when its name-based decision is ambiguous.

pub mod album;
pub mod distance;
pub mod track;

pub use album::{resolve_album, AlbumDecision};
pub use distance::levenshtein;
pub use track::{resolve_track, TrackDecision};

/// Fraction of the reference string length that the runner-up score must
/// trail the best score by before a match counts as decisive.
///
/// Heuristic, tuned against real libraries; not derived from a model.
pub const SCORE_MARGIN: f64 = 0.125;

/// Album name distances at or below this are treated as near-exact and
/// never trigger the track-evidence fallback.
pub const NEAR_EXACT_DISTANCE: usize = 1;

/// The two normalized title strings a track file name is compared against:
/// the bare title, and the common "Artist - Title" naming convention.
pub(crate) fn title_variants(title: &str, artist: &str) -> [String; 2] {
    [
        title.to_lowercase(),
        format!("{} - {}", artist, title).to_lowercase(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_variants_are_lowercased() {
        let [plain, combined] = title_variants("Song One", "The Band");
        assert_eq!(plain, "song one");
        assert_eq!(combined, "the band - song one");
    }
}
