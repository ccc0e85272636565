//! Export modules for XSPF and JSON playlists

pub mod json;
pub mod location;
pub mod xspf;

use crate::error::Result;
use crate::types::ResolvedEntry;
use std::path::Path;

pub use json::write_json;
pub use xspf::write_xspf;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xspf,
    Json,
}

impl Format {
    /// Parse a format name as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "xspf" => Some(Format::Xspf),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// File extension for output path derivation
    pub fn extension(self) -> &'static str {
        match self {
            Format::Xspf => "xspf",
            Format::Json => "json",
        }
    }
}

/// Write the resolved playlist in the requested format
pub fn write(entries: &[ResolvedEntry], output_path: &Path, format: Format) -> Result<()> {
    match format {
        Format::Xspf => write_xspf(entries, output_path),
        Format::Json => write_json(entries, output_path),
    }
}
