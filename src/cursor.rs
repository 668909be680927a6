//! Forward-only cursor over inline text.
//!
//! Recognizers never touch the cursor directly: they get a [`Window`] from
//! [`Cursor::window`] and the parser advances the cursor after a match is
//! committed.

use crate::inline::Window;

/// A cursor for byte-by-byte scanning of inline content.
///
/// # Example
/// ```
/// use linkspan::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"see http://example.com");
/// assert_eq!(cursor.peek(), Some(b's'));
/// cursor.advance(3);
/// assert_eq!(cursor.peek(), Some(b' '));
/// assert_eq!(cursor.window().bytes(), b" http://example.com");
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Skip while predicate is true, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// True at the start of input or right after a newline.
    #[inline]
    pub fn is_line_start(&self) -> bool {
        self.pos == 0 || self.input.get(self.pos - 1) == Some(&b'\n')
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Find the next occurrence of a byte using memchr.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.remaining_slice())
    }

    /// Non-destructive lookahead from the current position.
    #[inline]
    pub fn window(&self) -> Window<'a> {
        Window::new(self.remaining_slice(), self.pos)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
