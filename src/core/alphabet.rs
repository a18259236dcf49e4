//! Alphabet configuration for the Ghost trie
//!
//! An Alphabet maps letters to dense child-slot indices and back. The trie
//! sizes every node's child table to the alphabet cardinality, so O(1)
//! child lookup by letter falls out of the mapping.

use std::fmt;

/// A contiguous run of byte values usable as Ghost letters
///
/// Defined by a starting byte and a cardinality; letter `start + i` maps to
/// slot index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    start: u8,
    base: usize,
}

impl Alphabet {
    /// The 26 ASCII lowercase letters, the standard Ghost alphabet
    pub const LOWERCASE: Self = Self {
        start: b'a',
        base: 26,
    };

    /// Create an alphabet covering `base` letters starting at `start`
    ///
    /// # Examples
    /// ```
    /// use ghost_solver::core::Alphabet;
    ///
    /// let digits = Alphabet::new(b'0', 10);
    /// assert_eq!(digits.index_of(b'7'), 7);
    /// ```
    #[must_use]
    pub const fn new(start: u8, base: usize) -> Self {
        Self { start, base }
    }

    /// Number of letters in the alphabet (the child-table width)
    #[inline]
    #[must_use]
    pub const fn base(self) -> usize {
        self.base
    }

    /// Check whether a byte is a letter of this alphabet
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        (letter as usize) >= (self.start as usize)
            && (letter as usize) < (self.start as usize) + self.base
    }

    /// Map a letter to its child-slot index
    ///
    /// Callers supply sanitized input; an out-of-alphabet byte is a contract
    /// violation and the returned index will fail the trie's bounds check.
    ///
    /// # Panics
    /// Panics if `letter` precedes the alphabet start (index underflow).
    #[inline]
    #[must_use]
    pub fn index_of(self, letter: u8) -> usize {
        usize::from(letter - self.start)
    }

    /// Map a child-slot index back to its letter
    ///
    /// # Panics
    /// Panics in debug mode if `index` is outside the alphabet.
    #[inline]
    #[must_use]
    pub fn letter_at(self, index: usize) -> u8 {
        debug_assert!(index < self.base, "slot index outside alphabet");
        self.start + index as u8
    }

    /// Check that every byte of `word` is a letter of this alphabet
    #[must_use]
    pub fn spans(self, word: &str) -> bool {
        word.bytes().all(|b| self.contains(b))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            self.start as char,
            self.letter_at(self.base - 1) as char
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_roundtrip() {
        let alphabet = Alphabet::LOWERCASE;
        assert_eq!(alphabet.base(), 26);
        for (i, letter) in (b'a'..=b'z').enumerate() {
            assert_eq!(alphabet.index_of(letter), i);
            assert_eq!(alphabet.letter_at(i), letter);
        }
    }

    #[test]
    fn contains_bounds() {
        let alphabet = Alphabet::LOWERCASE;
        assert!(alphabet.contains(b'a'));
        assert!(alphabet.contains(b'z'));
        assert!(!alphabet.contains(b'A'));
        assert!(!alphabet.contains(b'`')); // one before 'a'
        assert!(!alphabet.contains(b'{')); // one past 'z'
    }

    #[test]
    fn custom_alphabet() {
        let digits = Alphabet::new(b'0', 10);
        assert_eq!(digits.index_of(b'0'), 0);
        assert_eq!(digits.index_of(b'9'), 9);
        assert!(!digits.contains(b'a'));
    }

    #[test]
    fn spans_checks_every_byte() {
        let alphabet = Alphabet::LOWERCASE;
        assert!(alphabet.spans("ghost"));
        assert!(alphabet.spans(""));
        assert!(!alphabet.spans("Ghost"));
        assert!(!alphabet.spans("gh0st"));
    }

    #[test]
    fn display_shows_range() {
        assert_eq!(Alphabet::LOWERCASE.to_string(), "a..=z");
    }
}
