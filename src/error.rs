//! Unified error types for playmatch
//!
//! Error strategy:
//! - Per-entry conditions (album with no audio files): Recoverable, the
//!   entry keeps a best-guess result and the batch continues
//! - Run-level conditions (no album candidates, unreadable playlist,
//!   output failures): Fatal, abort the whole invocation
//!
//! All errors include actionable suggestions where possible.

use std::path::PathBuf;
use thiserror::Error;

/// Audio file extensions recognized when scanning album directories
pub const SUPPORTED_FORMATS: &str = "MP3, M4A, WMA, FLAC, WAV, OGG, AAC";

/// Top-level error type for playmatch operations
#[derive(Debug, Error)]
pub enum PlaymatchError {
    // =========================================================================
    // Recoverable errors - flag entry, continue batch
    // =========================================================================
    #[error("Album directory '{album}' contains no audio files\n  Supported formats: {SUPPORTED_FORMATS}")]
    EmptyAlbumTrackSet { album: String },

    // =========================================================================
    // Fatal errors - abort entire run
    // =========================================================================
    #[error("No album directories found under the search paths\n  Tip: each search path should contain one subdirectory per album,\n  with the album's audio files directly inside it")]
    NoCandidates,

    #[error("Failed to parse playlist '{path}': {reason}\n  Tip: the playlist must be a JSON array of objects with\n  \"title\", \"artist\", \"album\" and \"length\" fields")]
    PlaylistParse { path: PathBuf, reason: String },

    #[error("File not found: '{0}'\n  Tip: Check the path exists and is accessible")]
    FileNotFound(PathBuf),

    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    OutputError { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for playmatch operations
pub type Result<T> = std::result::Result<T, PlaymatchError>;

impl PlaymatchError {
    /// Returns true if this error is recoverable (flag the entry, continue batch)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PlaymatchError::EmptyAlbumTrackSet { .. })
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!(
                    "Permission denied. Check that you have write access to {}",
                    path.display()
                )
            }
            std::io::ErrorKind::NotFound => {
                format!(
                    "Directory does not exist: {}",
                    path.parent()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                )
            }
            _ => err.to_string(),
        };
        PlaymatchError::OutputError { path, reason }
    }
}
