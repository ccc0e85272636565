//! JSON playlist export for interoperability with other tools

use crate::error::{PlaymatchError, Result};
use crate::types::ResolvedEntry;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// JSON output schema version
const SCHEMA_VERSION: &str = "1.0";

/// Top-level JSON output structure
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistJson {
    /// Schema version for forward compatibility
    pub version: String,
    /// Export metadata
    pub metadata: ExportMetadata,
    /// Resolved playlist entries, in playlist order
    pub entries: Vec<EntryJson>,
}

/// Export metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// playmatch version that generated this file
    pub generator_version: String,
    /// Timestamp of export
    pub exported_at: String,
    /// Number of entries
    pub entry_count: usize,
}

/// JSON representation of one resolved entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryJson {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_seconds: u32,
    /// Matched file path; absent when no audio file could be found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the match was unambiguous
    pub confident: bool,
}

/// Write resolved entries to a JSON file
///
/// Uses atomic write pattern: writes to a temp file first, then renames.
/// This prevents data corruption if the write is interrupted.
pub fn write_json(entries: &[ResolvedEntry], output_path: &Path) -> Result<()> {
    let temp_path = output_path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| PlaymatchError::OutputError {
        path: output_path.to_path_buf(),
        reason: format!("Failed to create temp file: {}", e),
    })?;

    let writer = BufWriter::new(file);

    let output = PlaylistJson {
        version: SCHEMA_VERSION.to_string(),
        metadata: ExportMetadata {
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            entry_count: entries.len(),
        },
        entries: entries.iter().map(entry_to_json).collect(),
    };

    serde_json::to_writer_pretty(writer, &output).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        PlaymatchError::OutputError {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // Atomic rename: either succeeds completely or fails without modifying target
    std::fs::rename(&temp_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        PlaymatchError::OutputError {
            path: output_path.to_path_buf(),
            reason: format!("Failed to finalize file: {}", e),
        }
    })?;

    info!("Wrote {} entries to {}", entries.len(), output_path.display());

    Ok(())
}

fn entry_to_json(entry: &ResolvedEntry) -> EntryJson {
    EntryJson {
        title: entry.entry.title.clone(),
        artist: entry.entry.artist.clone(),
        album: entry.entry.album.clone(),
        duration_seconds: entry.entry.duration_seconds,
        location: entry
            .location
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        confident: entry.confident,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlaylistEntry;
    use std::io::BufReader;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_round_trips_entries() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");

        let entries = vec![ResolvedEntry {
            entry: PlaylistEntry {
                title: "Song One".to_string(),
                artist: "X".to_string(),
                album: "Greatest Hits".to_string(),
                duration_seconds: 214,
            },
            location: Some(PathBuf::from("/music/greatest hits/song one.mp3")),
            confident: true,
        }];

        write_json(&entries, &output).unwrap();

        let reader = BufReader::new(File::open(&output).unwrap());
        let parsed: PlaylistJson = serde_json::from_reader(reader).unwrap();
        assert_eq!(parsed.version, SCHEMA_VERSION);
        assert_eq!(parsed.metadata.entry_count, 1);
        assert_eq!(parsed.entries[0].title, "Song One");
        assert_eq!(
            parsed.entries[0].location.as_deref(),
            Some("/music/greatest hits/song one.mp3")
        );
        assert!(parsed.entries[0].confident);
    }

    #[test]
    fn test_absent_location_is_omitted() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");

        let entries = vec![ResolvedEntry {
            entry: PlaylistEntry {
                title: "Lost Song".to_string(),
                artist: "X".to_string(),
                album: "Nowhere".to_string(),
                duration_seconds: 100,
            },
            location: None,
            confident: false,
        }];

        write_json(&entries, &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(!written.contains("\"location\""));
        assert!(written.contains("\"confident\": false"));
    }
}
