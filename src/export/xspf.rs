//! XSPF playlist writer
//!
//! Produces an XSPF 1.0 document:
//!
//! ```xml
//! <playlist version="1" xmlns="http://xspf.org/ns/0/">
//!   <title>Unnamed</title>
//!   <date>...</date>
//!   <trackList>
//!     <track>
//!       <title>...</title><creator>...</creator><album>...</album>
//!       <duration>214000</duration><location>...</location>
//!     </track>
//!   </trackList>
//! </playlist>
//! ```

use crate::error::{PlaymatchError, Result};
use crate::export::location::path_to_location;
use crate::types::ResolvedEntry;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{info, warn};

const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";
const XSPF_VERSION: &str = "1";
const PLAYLIST_TITLE: &str = "Unnamed";

/// Write resolved entries to an XSPF file
///
/// Uses atomic write pattern: writes to a temp file first, then renames.
/// This prevents data corruption if the write is interrupted.
pub fn write_xspf(entries: &[ResolvedEntry], output_path: &Path) -> Result<()> {
    let temp_path = output_path.with_extension("xspf.tmp");

    let cleanup_and_error = |reason: String| -> PlaymatchError {
        let _ = std::fs::remove_file(&temp_path);
        PlaymatchError::OutputError {
            path: output_path.to_path_buf(),
            reason,
        }
    };

    let file = File::create(&temp_path).map_err(|e| PlaymatchError::OutputError {
        path: output_path.to_path_buf(),
        reason: format!("Failed to create temp file: {}", e),
    })?;

    let writer = BufWriter::new(file);
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;

    let mut root = BytesStart::new("playlist");
    root.push_attribute(("version", XSPF_VERSION));
    root.push_attribute(("xmlns", XSPF_NAMESPACE));
    xml.write_event(Event::Start(root))
        .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;

    write_text_element(&mut xml, "title", PLAYLIST_TITLE)
        .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;
    write_text_element(&mut xml, "date", &chrono::Utc::now().to_rfc3339())
        .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;

    xml.write_event(Event::Start(BytesStart::new("trackList")))
        .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;

    for entry in entries {
        write_track(&mut xml, entry)
            .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;
    }

    xml.write_event(Event::End(BytesEnd::new("trackList")))
        .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;
    xml.write_event(Event::End(BytesEnd::new("playlist")))
        .map_err(|e| cleanup_and_error(format!("XML write error: {}", e)))?;

    // Flush the writer before rename
    drop(xml);

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

/// Write one `<track>` element
fn write_track<W: std::io::Write>(
    xml: &mut Writer<W>,
    entry: &ResolvedEntry,
) -> quick_xml::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("track")))?;

    write_text_element(xml, "title", &entry.entry.title)?;
    write_text_element(xml, "creator", &entry.entry.artist)?;
    write_text_element(xml, "album", &entry.entry.album)?;

    // XSPF duration is in milliseconds
    let millis = u64::from(entry.entry.duration_seconds) * 1000;
    write_text_element(xml, "duration", &millis.to_string())?;

    match &entry.location {
        Some(location) => {
            write_text_element(xml, "location", &path_to_location(location))?;
        }
        None => {
            warn!(
                "No file found for '{}' by '{}', omitting location",
                entry.entry.title, entry.entry.artist
            );
        }
    }

    xml.write_event(Event::End(BytesEnd::new("track")))?;

    Ok(())
}

/// Write `<name>text</name>`, with text escaping handled by quick-xml
fn write_text_element<W: std::io::Write>(
    xml: &mut Writer<W>,
    name: &str,
    text: &str,
) -> quick_xml::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlaylistEntry;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn resolved(title: &str, location: Option<&str>, confident: bool) -> ResolvedEntry {
        ResolvedEntry {
            entry: PlaylistEntry {
                title: title.to_string(),
                artist: "The Band & Friends".to_string(),
                album: "Greatest <Hits>".to_string(),
                duration_seconds: 214,
            },
            location: location.map(PathBuf::from),
            confident,
        }
    }

    #[test]
    fn test_writes_well_formed_xspf() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.xspf");
        let entries = vec![resolved(
            "Song One",
            Some("/music/greatest hits/song one.mp3"),
            true,
        )];

        write_xspf(&entries, &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();

        assert!(written.contains(r#"<playlist version="1" xmlns="http://xspf.org/ns/0/">"#));
        assert!(written.contains("<title>Song One</title>"));
        // Text content is XML-escaped
        assert!(written.contains("<creator>The Band &amp; Friends</creator>"));
        assert!(written.contains("<album>Greatest &lt;Hits&gt;</album>"));
        // Seconds converted to milliseconds
        assert!(written.contains("<duration>214000</duration>"));
        // Location is percent-encoded with slashes preserved
        assert!(written.contains("<location>/music/greatest%20hits/song%20one.mp3</location>"));
    }

    #[test]
    fn test_entry_without_location_omits_element() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.xspf");
        let entries = vec![resolved("Lost Song", None, false)];

        write_xspf(&entries, &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();

        assert!(written.contains("<title>Lost Song</title>"));
        assert!(!written.contains("<location>"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.xspf");
        write_xspf(&[], &output).unwrap();

        assert!(output.exists());
        assert!(!dir.path().join("out.xspf.tmp").exists());
    }
}
