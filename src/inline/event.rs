//! Inline-level event types.

use std::borrow::Cow;

use crate::Range;

/// Events emitted by the inline parser.
///
/// Ranges index the text handed to [`InlineParser::parse`](super::InlineParser::parse).
/// Consecutive events tile that text with no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEvent {
    /// Plain text content.
    Text(Range),

    /// Inline code span (already resolved, no further parsing inside).
    Code {
        /// Whole span including the backtick runs.
        full: Range,
        /// Content between the backticks, padding stripped.
        content: Range,
    },

    /// A link recognized from its textual shape alone.
    Autolink {
        /// The literal link text as written.
        url: Range,
        /// What kind of literal was recognized.
        kind: AutolinkKind,
    },
}

impl InlineEvent {
    /// Source range this event covers.
    pub fn range(&self) -> Range {
        match *self {
            InlineEvent::Text(r) => r,
            InlineEvent::Code { full, .. } => full,
            InlineEvent::Autolink { url, .. } => url,
        }
    }
}

/// The shape of a recognized autolink literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutolinkKind {
    /// `http://`, `https://` or `ftp://` followed by a host.
    Url,
    /// A bare `www.` host name without a scheme.
    Www,
    /// An email-like `local@domain.tld` address.
    Email,
}

impl AutolinkKind {
    #[inline]
    pub fn is_email(self) -> bool {
        self == AutolinkKind::Email
    }

    /// Build the link target for the literal `text`.
    ///
    /// ```
    /// use linkspan::AutolinkKind;
    ///
    /// assert_eq!(AutolinkKind::Www.destination("www.example.org"), "http://www.example.org");
    /// assert_eq!(AutolinkKind::Email.destination("a@b.io"), "mailto:a@b.io");
    /// ```
    pub fn destination(self, text: &str) -> Cow<'_, str> {
        match self {
            AutolinkKind::Url => Cow::Borrowed(text),
            AutolinkKind::Www => Cow::Owned(format!("http://{text}")),
            AutolinkKind::Email => Cow::Owned(format!("mailto:{text}")),
        }
    }
}

/// An autolink lifted out of an event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autolink {
    pub kind: AutolinkKind,
    pub range: Range,
}

impl Autolink {
    /// Literal text of the link within `input`.
    ///
    /// Every byte an autolink can cover is ASCII, so this only fails when
    /// `input` is not the text the link was found in.
    pub fn text<'a>(&self, input: &'a [u8]) -> Result<&'a str, std::str::Utf8Error> {
        self.range.try_slice_str(input)
    }
}
