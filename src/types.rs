//! Core data types for playmatch
//!
//! These types represent the domain model and flow through the pipeline.

use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Playlist entries
// =============================================================================

/// One entry of the input playlist: pure metadata, no file path
///
/// The wire format uses `length` for the duration in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistEntry {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Duration in seconds
    #[serde(rename = "length", alias = "duration_seconds")]
    pub duration_seconds: u32,
}

/// A playlist entry together with the outcome of matching it
///
/// Matching never mutates the entry; the resolved location lives alongside
/// it so entries can be evaluated in parallel and merged afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    pub entry: PlaylistEntry,
    /// Best-guess file location; absent only when the chosen album had no
    /// audio files at all
    pub location: Option<PathBuf>,
    /// Whether both the album and track choices were unambiguous
    pub confident: bool,
}

// =============================================================================
// Library candidates
// =============================================================================

/// One album directory discovered under a search path
///
/// The name is the directory's base name, lowercased at construction so all
/// distance comparisons run on normalized text.
#[derive(Debug, Clone)]
pub struct AlbumCandidate {
    pub name: String,
    pub location: PathBuf,
    pub tracks: Vec<TrackCandidate>,
}

/// One playable audio file inside an album directory
///
/// The name is the file's stem (extension stripped), lowercased.
#[derive(Debug, Clone)]
pub struct TrackCandidate {
    pub name: String,
    pub location: PathBuf,
}

// =============================================================================
// Match results
// =============================================================================

/// Per-entry output of the matching pipeline
///
/// `confident = false` means the guess should be surfaced for human
/// confirmation, but it is still the best available guess. The location is
/// only absent when the chosen album had an empty track set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub location: Option<PathBuf>,
    pub confident: bool,
}

// =============================================================================
// Supported formats
// =============================================================================

/// Audio formats recognized by the library scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    M4a,
    Wma,
    Flac,
    Wav,
    Ogg,
    Aac,
}

impl AudioFormat {
    /// Detect format from file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" => Some(AudioFormat::Mp3),
            "m4a" => Some(AudioFormat::M4a),
            "wma" => Some(AudioFormat::Wma),
            "flac" => Some(AudioFormat::Flac),
            "wav" => Some(AudioFormat::Wav),
            "ogg" => Some(AudioFormat::Ogg),
            "aac" => Some(AudioFormat::Aac),
            _ => None,
        }
    }

    /// Check if a path has a supported extension
    pub fn is_supported_path(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_detection_case_insensitive() {
        assert_eq!(AudioFormat::from_extension("FLAC"), Some(AudioFormat::Flac));
        assert_eq!(AudioFormat::from_extension("Mp3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_supported_path() {
        assert!(AudioFormat::is_supported_path(Path::new("/music/a/track.ogg")));
        assert!(AudioFormat::is_supported_path(Path::new("/music/a/Track.M4A")));
        assert!(!AudioFormat::is_supported_path(Path::new("/music/a/cover.jpg")));
        assert!(!AudioFormat::is_supported_path(Path::new("/music/a/noext")));
    }

    #[test]
    fn test_entry_deserializes_length_field() {
        let json = r#"{"title":"Song One","artist":"X","album":"Greatest Hits","length":214}"#;
        let entry: PlaylistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.duration_seconds, 214);
        assert_eq!(entry.title, "Song One");
    }
}
