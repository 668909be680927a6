//! The seam between the inline parser and the constructs it recognizes.
//!
//! A recognizer declares which bytes trigger it and at what priority it runs.
//! When triggered it looks at a read-only [`Window`] and either declines or
//! returns a [`Scan`]. The parser alone commits a scan: it merges any leading
//! text, emits the event and advances the cursor, in that order, exactly once.

use crate::Range;

use super::InlineEvent;

/// Read-only lookahead from the cursor to the end of the inline text.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    bytes: &'a [u8],
    base: u32,
}

impl<'a> Window<'a> {
    /// Create a window over `bytes`, which start at document offset `base`.
    #[inline]
    pub fn new(bytes: &'a [u8], base: usize) -> Self {
        debug_assert!(base + bytes.len() <= u32::MAX as usize);
        Self {
            bytes,
            base: base as u32,
        }
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Absolute offset of the first byte.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Convert a window-relative `[start, end)` into an absolute range.
    #[inline]
    pub fn absolute(&self, start: usize, end: usize) -> Range {
        debug_assert!(end <= self.bytes.len());
        Range::from_usize(start, end).shift(self.base)
    }
}

/// What makes the parser invoke a recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A specific byte at the cursor.
    Byte(u8),
    /// A space at the cursor, and the start of every line.
    Space,
}

impl Trigger {
    /// Whether `b` at the cursor fires this trigger.
    #[inline]
    pub fn matches_byte(self, b: u8) -> bool {
        match self {
            Trigger::Byte(t) => t == b,
            Trigger::Space => b == b' ',
        }
    }
}

/// Order in which recognizers sharing a trigger are tried. Lower runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u16);

impl Priority {
    /// Code spans are raw zones and claim their backticks before anything else.
    pub const CODE_SPAN: Priority = Priority(100);
    /// Literal autolinks run after every other recognizer on shared triggers,
    /// so emphasis or strikethrough delimiters win where they overlap.
    pub const LINKIFY: Priority = Priority(999);
}

/// A recognized construct, not yet committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// Bytes the cursor advances by on commit.
    pub consumed: usize,
    /// Bytes consumed ahead of the construct that belong to the plain text
    /// before it.
    pub leading_text: Option<Range>,
    /// The node to emit.
    pub event: InlineEvent,
}

/// An inline construct the parser can dispatch to.
///
/// Implementations must be pure: same window, same answer, no side effects.
/// Returning `None` leaves the parser exactly where it was.
pub trait InlineRecognizer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Triggers that make the parser call [`scan`](Self::scan).
    fn triggers(&self) -> &[Trigger];

    /// Attempt a match at the start of `window`.
    fn scan(&self, window: Window<'_>) -> Option<Scan>;
}
