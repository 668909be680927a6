//! linkspan: literal autolink recognition for inline Markdown text.
//!
//! Finds bare URLs (`https://example.com`), `www.` host names and email
//! addresses in running prose and turns each into an autolink event, leaving
//! the surrounding text untouched.
//!
//! # Design Principles
//! - No regex: pure byte-level scanning
//! - No AST: a flat event stream of ranges into the input
//! - Recognizers are pure; the parser commits a match exactly once
//! - Linkify runs last on shared triggers, after every other recognizer
//!
//! # Example
//! ```
//! use linkspan::{AutolinkKind, InlineEvent, Range};
//!
//! let events = linkspan::linkify("See http://example.com.");
//! assert_eq!(
//!     events,
//!     vec![
//!         InlineEvent::Text(Range::new(0, 4)),
//!         InlineEvent::Autolink { url: Range::new(4, 22), kind: AutolinkKind::Url },
//!         InlineEvent::Text(Range::new(22, 23)),
//!     ]
//! );
//! ```

pub mod cursor;
pub mod inline;
pub mod limits;
pub mod range;

use std::sync::LazyLock;

pub use inline::{
    Autolink, AutolinkKind, CodeSpan, InlineEvent, InlineParser, InlineRecognizer, Linkify,
    Priority, Scan, Trigger, Window, merge_text,
};
pub use range::Range;

/// Parsing options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Recognize literal URLs, `www.` hosts and email addresses.
    pub autolink_literals: bool,
    /// Recognize `` `code` `` spans, inside which nothing is linkified.
    pub code_spans: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            autolink_literals: true,
            code_spans: true,
        }
    }
}

static DEFAULT_PARSER: LazyLock<InlineParser> = LazyLock::new(InlineParser::new);

/// Parse inline text into events with the default options.
pub fn linkify(input: &str) -> Vec<InlineEvent> {
    parse_with(&DEFAULT_PARSER, input)
}

/// Parse inline text into events with options.
pub fn linkify_with_options(input: &str, options: &Options) -> Vec<InlineEvent> {
    parse_with(&InlineParser::with_options(options), input)
}

/// Collect just the autolinks in `input`.
///
/// ```
/// use linkspan::AutolinkKind;
///
/// let input = "mail a.b@example.com or visit www.example.org";
/// let links = linkspan::find_autolinks(input);
/// assert_eq!(links.len(), 2);
/// assert_eq!(links[0].kind, AutolinkKind::Email);
/// assert_eq!(links[1].text(input.as_bytes()), Ok("www.example.org"));
/// ```
pub fn find_autolinks(input: &str) -> Vec<Autolink> {
    linkify(input)
        .into_iter()
        .filter_map(|event| match event {
            InlineEvent::Autolink { url, kind } => Some(Autolink { kind, range: url }),
            _ => None,
        })
        .collect()
}

fn parse_with(parser: &InlineParser, input: &str) -> Vec<InlineEvent> {
    let mut events = Vec::with_capacity((input.len() / 32).max(4));
    parser.parse(input.as_bytes(), &mut events);
    events
}
