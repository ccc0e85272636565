//! JSON playlist source
//!
//! The input is a JSON array of entry objects:
//!
//! ```json
//! [{"title": "Song One", "artist": "X", "album": "Greatest Hits", "length": 214}]
//! ```

use crate::error::{PlaymatchError, Result};
use crate::types::PlaylistEntry;
use std::fs;
use std::path::Path;
use tracing::info;

/// An ordered collection of playlist entries
#[derive(Debug, Clone)]
pub struct Playlist {
    pub entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Parse a playlist from its JSON text
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<PlaylistEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined duration of all entries, in seconds
    pub fn total_duration(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| u64::from(e.duration_seconds))
            .sum()
    }
}

/// Load and parse a playlist file
pub fn load(path: &Path) -> Result<Playlist> {
    let json = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlaymatchError::FileNotFound(path.to_path_buf())
        } else {
            PlaymatchError::Io(e)
        }
    })?;

    let playlist = Playlist::parse(&json).map_err(|e| PlaymatchError::PlaylistParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(
        "Loaded {} playlist entries ({}s total)",
        playlist.len(),
        playlist.total_duration()
    );

    Ok(playlist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let json = r#"[
            {"title": "Song One", "artist": "X", "album": "Greatest Hits", "length": 214},
            {"title": "Song Two", "artist": "Y", "album": "Greatest Hits", "length": 186}
        ]"#;

        let playlist = Playlist::parse(json).unwrap();
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.total_duration(), 400);
        assert_eq!(playlist.entries[0].title, "Song One");
        assert_eq!(playlist.entries[1].artist, "Y");
    }

    #[test]
    fn test_parse_empty_playlist() {
        let playlist = Playlist::parse("[]").unwrap();
        assert!(playlist.is_empty());
        assert_eq!(playlist.total_duration(), 0);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let json = r#"[{"title": "Song One", "album": "Greatest Hits", "length": 214}]"#;
        assert!(Playlist::parse(json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/playlist.json"));
        assert!(matches!(result, Err(PlaymatchError::FileNotFound(_))));
    }
}
