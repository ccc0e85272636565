//! playmatch - Playlist-to-library fuzzy matcher
//!
//! A command-line utility that takes an abstract playlist (title/artist/album
//! records with no file paths) and matches each entry against a local music
//! collection organized into album directories, using Levenshtein distance
//! and a two-stage album-then-track resolution algorithm. Outputs XSPF or
//! JSON playlists.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `playlist`: JSON playlist parsing
//! - `discovery`: Album directory and audio file scanning
//! - `matching`: Edit distance and album/track candidate resolution
//! - `pipeline`: Parallel matching orchestration
//! - `review`: Interactive confirmation of low-confidence matches
//! - `export`: XSPF and JSON output
//!
//! # Example
//!
//! ```no_run
//! use playmatch::{config::Settings, pipeline};
//!
//! let settings = Settings::default();
//! let result = pipeline::run(&settings).expect("Matching failed");
//! println!("Matched {} entries", result.total_entries);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod matching;
pub mod pipeline;
pub mod playlist;
pub mod review;
pub mod types;

// Re-export key types at crate root
pub use error::{PlaymatchError, Result};
pub use types::{AlbumCandidate, MatchResult, PlaylistEntry, ResolvedEntry, TrackCandidate};
