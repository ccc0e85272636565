//! Location URI encoding for exported playlists
//!
//! XSPF `location` elements carry percent-encoded paths with `/` kept as
//! the separator, so players can resolve them as file URIs.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::Path;

/// Characters that must be percent-encoded in path segments
/// Based on RFC 3986, conservative for broad player compatibility
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a filesystem path for a playlist `location` element,
/// preserving `/` separators.
pub fn path_to_location(path: &Path) -> String {
    let path_str = path.to_string_lossy();

    // Normalize separators (Windows backslashes to forward slashes)
    let normalized = path_str.replace('\\', "/");

    // Encode each path segment separately (preserve slashes)
    normalized
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("/")
}
