//! Interactive review of low-confidence matches
//!
//! Each flagged entry is shown with its best guess; the operator either
//! accepts the guess by entering nothing, or supplies a replacement path,
//! which must reference an existing file.

use crate::error::Result;
use crate::types::ResolvedEntry;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Prompt the operator for every entry flagged as not confident.
///
/// Returns the number of entries whose guess was overridden.
pub fn review_unconfident(entries: &mut [ResolvedEntry]) -> Result<usize> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut overridden = 0;

    for resolved in entries.iter_mut().filter(|e| !e.confident) {
        println!("The following track could not be matched confidently:");
        println!("   Title: {}", resolved.entry.title);
        println!("  Artist: {}", resolved.entry.artist);
        println!("   Album: {}", resolved.entry.album);
        match &resolved.location {
            Some(location) => println!("   Guess: {}", location.display()),
            None => println!("   Guess: (none)"),
        }
        println!("Please enter its path, or nothing if the guess is right.");

        match prompt_for_path(&mut input, resolved.location.as_deref())? {
            Some(path) => {
                if resolved.location.as_deref() != Some(path.as_path()) {
                    overridden += 1;
                }
                resolved.location = Some(path);
            }
            None => {
                warn!(
                    "No path supplied for '{}', leaving entry unresolved",
                    resolved.entry.title
                );
            }
        }
    }

    Ok(overridden)
}

/// Read paths until one exists; blank input accepts the guess.
///
/// Returns `None` only when there is no guess and the operator gives up by
/// entering a blank line.
fn prompt_for_path(input: &mut impl BufRead, guess: Option<&Path>) -> Result<Option<PathBuf>> {
    let mut attempted = false;

    loop {
        if attempted {
            println!("Invalid path. Please try again.");
        }

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: keep whatever guess there is
            return Ok(guess.map(Path::to_path_buf));
        }

        let trimmed = line.trim();
        let candidate = if trimmed.is_empty() {
            match guess {
                Some(g) => g.to_path_buf(),
                None => return Ok(None),
            }
        } else {
            PathBuf::from(trimmed)
        };

        if candidate.is_file() {
            return Ok(Some(candidate));
        }

        attempted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_blank_input_accepts_existing_guess() {
        let dir = TempDir::new().unwrap();
        let guess = dir.path().join("track.mp3");
        File::create(&guess).unwrap();

        let mut input = b"\n".as_slice();
        let result = prompt_for_path(&mut input, Some(&guess)).unwrap();
        assert_eq!(result, Some(guess));
    }

    #[test]
    fn test_replacement_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.mp3");
        File::create(&real).unwrap();

        // First a bogus path, then the real one
        let lines = format!("/nowhere/fake.mp3\n{}\n", real.display());
        let mut input = lines.as_bytes();
        let result = prompt_for_path(&mut input, None).unwrap();
        assert_eq!(result, Some(real));
    }

    #[test]
    fn test_blank_with_no_guess_gives_up() {
        let mut input = b"\n".as_slice();
        let result = prompt_for_path(&mut input, None).unwrap();
        assert_eq!(result, None);
    }
}
