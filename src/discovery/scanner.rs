//! Library scanning
//!
//! Each immediate subdirectory of a search root is one album candidate; the
//! audio files directly inside it are its track candidates. Names are
//! lowercased here, once, so the matching engine always compares normalized
//! text.

use crate::error::{PlaymatchError, Result};
use crate::types::{AlbumCandidate, AudioFormat, TrackCandidate};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Scan the search roots for album directories
///
/// Every root must exist; a root with no subdirectories contributes no
/// candidates but is not an error (the pipeline rejects an empty overall
/// candidate set).
pub fn scan(roots: &[PathBuf]) -> Result<Vec<AlbumCandidate>> {
    let mut albums = Vec::new();

    for root in roots {
        if !root.exists() {
            return Err(PlaymatchError::FileNotFound(root.clone()));
        }

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_dir() {
                let album = scan_album(entry.path());
                debug!(
                    "Discovered album '{}' with {} tracks",
                    album.name,
                    album.tracks.len()
                );
                albums.push(album);
            }
        }
    }

    info!("Discovered {} album directories", albums.len());

    if albums.is_empty() {
        warn!("No album directories found under the search paths");
    }

    Ok(albums)
}

/// Build one album candidate from a directory
fn scan_album(dir: &Path) -> AlbumCandidate {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let tracks = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| try_track_candidate(e.path()))
        .collect();

    AlbumCandidate {
        name,
        location: dir.to_path_buf(),
        tracks,
    }
}

/// Build a track candidate if the file has a supported audio extension
fn try_track_candidate(path: &Path) -> Option<TrackCandidate> {
    if !AudioFormat::is_supported_path(path) {
        return None;
    }

    let name = path.file_stem()?.to_string_lossy().to_lowercase();

    Some(TrackCandidate {
        name,
        location: path.to_path_buf(),
    })
}
