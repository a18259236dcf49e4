//! Word list loading utilities
//!
//! The solver core assumes sanitized input, so everything loaded here is
//! trimmed, lowercased and checked against the alphabet before it reaches
//! the tree. Unusable entries are skipped, not reported.

use crate::core::Alphabet;
use std::fs;
use std::io;
use std::path::Path;

/// Sanitize one raw entry into a usable dictionary word
///
/// Returns `None` for empty lines and entries that fall outside the
/// alphabet even after lowercasing.
#[must_use]
pub fn sanitize(raw: &str, alphabet: Alphabet) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !alphabet.spans(&word) {
        return None;
    }
    Some(word)
}

/// Load dictionary words from a file, one per line
///
/// Returns the sanitized words, skipping any unusable entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ghost_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| sanitize(line, Alphabet::LOWERCASE))
        .collect();

    Ok(words)
}

/// Convert an embedded string slice into sanitized dictionary words
///
/// # Examples
/// ```
/// use ghost_solver::wordlists::loader::words_from_slice;
/// use ghost_solver::wordlists::SAMPLE;
///
/// let words = words_from_slice(SAMPLE);
/// assert_eq!(words.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .filter_map(|&s| sanitize(s, Alphabet::LOWERCASE))
        .collect()
}
