//! SIMD-accelerated markup scanning using memchr
//!
//! Uses memchr crate for fast byte searching with SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)
//!
//! Every accessor is bounds-checked: running off the end of the input
//! yields `None`/`false`, never a panic.

use memchr::{memchr, memmem};

/// Scanner for tag delimiter detection
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Create a scanner starting at `pos` (clamped to the input length)
    #[inline]
    pub fn at(input: &'a [u8], pos: usize) -> Self {
        Scanner {
            input,
            pos: pos.min(input.len()),
        }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position (clamped to the input length)
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining bytes
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Peek at current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at byte at offset from current position
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Check if input starts with a byte sequence at current position
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.remaining().starts_with(needle)
    }

    /// Check if we have at least n bytes remaining
    #[inline]
    pub fn has_remaining(&self, n: usize) -> bool {
        self.input.len() - self.pos >= n
    }

    /// Find next '<' (tag start) using SIMD
    #[inline]
    pub fn find_tag_start(&self) -> Option<usize> {
        memchr(b'<', self.remaining()).map(|i| self.pos + i)
    }

    /// Find next '>' (tag end) using SIMD
    /// Note: Does not handle '>' inside quotes; attribute values are not parsed
    #[inline]
    pub fn find_tag_end(&self) -> Option<usize> {
        memchr(b'>', self.remaining()).map(|i| self.pos + i)
    }

    /// Find the next closing sequence `</name` and return the position of its '<'
    pub fn find_closing_sequence(&self, name: &[u8]) -> Option<usize> {
        let mut needle = Vec::with_capacity(name.len() + 2);
        needle.extend_from_slice(b"</");
        needle.extend_from_slice(name);
        memmem::find(self.remaining(), &needle).map(|i| self.pos + i)
    }

    /// Check whether `</name>` starts at the current position
    #[inline]
    pub fn at_closing_tag(&self, name: &[u8]) -> bool {
        let rest = self.remaining();
        rest.starts_with(b"</")
            && rest[2..].starts_with(name)
            && rest.get(2 + name.len()) == Some(&b'>')
    }

    /// Get a slice from start to end positions (`None` if out of range)
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a [u8]> {
        self.input.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag_start() {
        let scanner = Scanner::new(b"hello <world>");
        assert_eq!(scanner.find_tag_start(), Some(6));
    }

    #[test]
    fn test_find_tag_end_from_position() {
        let scanner = Scanner::at(b"<a>b<c>", 3);
        assert_eq!(scanner.find_tag_end(), Some(6));
    }

    #[test]
    fn test_find_closing_sequence() {
        let scanner = Scanner::at(b"<p>one <b>x</b> two</p>", 3);
        assert_eq!(scanner.find_closing_sequence(b"p"), Some(19));
        assert_eq!(scanner.find_closing_sequence(b"i"), None);
    }

    #[test]
    fn test_at_closing_tag_requires_bracket() {
        assert!(Scanner::new(b"</div>").at_closing_tag(b"div"));
        assert!(!Scanner::new(b"</divx>").at_closing_tag(b"div"));
        assert!(!Scanner::new(b"</div").at_closing_tag(b"div"));
        assert!(!Scanner::new(b"<div>").at_closing_tag(b"div"));
    }

    #[test]
    fn test_bounds_are_checked() {
        let mut scanner = Scanner::new(b"<a");
        scanner.set_position(10);
        assert!(scanner.is_eof());
        assert_eq!(scanner.peek(), None);
        assert_eq!(scanner.peek_at(3), None);
        assert!(!scanner.has_remaining(1));
        assert_eq!(scanner.slice(1, 5), None);
    }
}
