//! Literal autolinks: bare URLs, `www.` hosts and email addresses in prose.
//!
//! Matching is anchored at a trigger position. A leading trigger byte
//! (space, `*`, `_`, `~`, `(`) is consumed provisionally; it only becomes
//! part of the committed scan, as plain text, when a link follows it. Tabs
//! and newlines are never consumed: at a line start the window begins at the
//! link itself.
//!
//! Grammar, in order of preference:
//! - URL: `(http|https|ftp)://` + optional `www.` + host + `.` + tld + path
//! - www: `www.` + host + `.` + tld + path
//! - email: `[a-zA-Z0-9.\-_+]+` `@` `[a-zA-Z0-9.\-_]+` with a `.` in the domain
//!
//! The host is 2..=256 bytes of `[-a-zA-Z0-9@:%._+~#=]`, the tld 2..=6
//! lowercase letters ending at a word boundary, and the path any run of
//! `[-a-zA-Z0-9@:%_+.~#?&/=();]`.

use crate::Range;
use crate::limits::{MAX_HOST_LEN, MAX_TLD_LEN, MIN_HOST_LEN, MIN_TLD_LEN};

use super::recognizer::{InlineRecognizer, Scan, Trigger, Window};
use super::{AutolinkKind, InlineEvent};

const SCHEMES: [&[u8]; 3] = [b"http://", b"https://", b"ftp://"];
const WWW: &[u8] = b"www.";

/// Positions where a literal autolink may start.
pub const TRIGGERS: [Trigger; 5] = [
    Trigger::Space,
    Trigger::Byte(b'*'),
    Trigger::Byte(b'_'),
    Trigger::Byte(b'~'),
    Trigger::Byte(b'('),
];

#[inline]
fn is_prefix_byte(b: u8) -> bool {
    TRIGGERS.iter().any(|t| t.matches_byte(b))
}

#[inline]
fn is_host_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'@' | b':' | b'%' | b'.' | b'_' | b'+' | b'~' | b'#' | b'=')
}

#[inline]
fn is_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'@'
                | b':'
                | b'%'
                | b'_'
                | b'+'
                | b'.'
                | b'~'
                | b'#'
                | b'?'
                | b'&'
                | b'/'
                | b'='
                | b'('
                | b')'
                | b';'
        )
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_email_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_' | b'+')
}

#[inline]
fn is_email_domain_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_')
}

/// End of the run of bytes satisfying `pred` that starts at `from`.
#[inline]
fn run_end(line: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    line[from..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(line.len(), |i| from + i)
}

/// A recognized autolink, before the parser commits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutolinkMatch {
    pub kind: AutolinkKind,
    /// Absolute range of the link text.
    pub span: Range,
    /// Absolute range of the trigger byte consumed ahead of the link.
    pub prefix: Option<Range>,
}

impl AutolinkMatch {
    /// Bytes to advance the cursor by: the prefix plus the link.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.prefix.map_or(0, |p| p.len_usize()) + self.span.len_usize()
    }
}

/// Attempt to recognize an autolink at the start of `window`.
///
/// Pure: reads only `window` and never past its end. `None` means nothing was
/// consumed, including any leading trigger byte.
///
/// ```
/// use linkspan::inline::{autolink, Window};
/// use linkspan::AutolinkKind;
///
/// let text = b" http://example.com.";
/// let m = autolink::scan(Window::new(text, 0)).unwrap();
/// assert_eq!(m.kind, AutolinkKind::Url);
/// assert_eq!(m.span.slice(text), b"http://example.com");
/// assert_eq!(m.consumed(), 19);
/// ```
pub fn scan(window: Window<'_>) -> Option<AutolinkMatch> {
    let prefix = usize::from(is_prefix_byte(window.first()?));
    let line = &window.bytes()[prefix..];

    let (kind, end) = match match_url(line) {
        Some((kind, end)) => (kind, trim_url_end(line, end)),
        None => (AutolinkKind::Email, match_email(line)?),
    };

    Some(AutolinkMatch {
        kind,
        span: window.absolute(prefix, prefix + end),
        prefix: (prefix > 0).then(|| window.absolute(0, prefix)),
    })
}

/// Scheme URL first, then the bare `www.` form.
fn match_url(line: &[u8]) -> Option<(AutolinkKind, usize)> {
    if let Some(scheme) = SCHEMES.iter().find(|&&s| line.starts_with(s)) {
        let host_start = scheme.len();
        // An optional `www.` may precede the host proper, which stretches
        // how far away the tld dot is allowed to be.
        let max_host = if line[host_start..].starts_with(WWW) {
            MAX_HOST_LEN + WWW.len()
        } else {
            MAX_HOST_LEN
        };
        if let Some(end) = match_host_and_path(line, host_start, max_host) {
            return Some((AutolinkKind::Url, end));
        }
    }
    if line.starts_with(WWW) {
        return match_host_and_path(line, WWW.len(), MAX_HOST_LEN)
            .map(|end| (AutolinkKind::Www, end));
    }
    None
}

/// Host + tld + path starting at `start`. Returns the end of the path run.
fn match_host_and_path(line: &[u8], start: usize, max_host: usize) -> Option<usize> {
    let host_end = run_end(line, start, is_host_byte);
    let dots_end = host_end.min(start + max_host + 1);
    let has_tld =
        (start + MIN_HOST_LEN..dots_end).any(|p| line[p] == b'.' && tld_at(line, p + 1));
    if !has_tld {
        return None;
    }
    // Host and tld bytes are all path bytes, so the path run covers them too.
    Some(run_end(line, start, is_path_byte))
}

/// 2..=6 lowercase letters at `from`, followed by a word boundary.
#[inline]
fn tld_at(line: &[u8], from: usize) -> bool {
    let len = line[from..]
        .iter()
        .take(MAX_TLD_LEN + 1)
        .take_while(|b| b.is_ascii_lowercase())
        .count();
    (MIN_TLD_LEN..=MAX_TLD_LEN).contains(&len)
        && line.get(from + len).is_none_or(|&b| !is_word_byte(b))
}

/// Drop trailing punctuation that belongs to the sentence, not the URL.
fn trim_url_end(line: &[u8], end: usize) -> usize {
    match line[end - 1] {
        b'.' => end - 1,
        b')' => {
            let mut closing = 0isize;
            for i in (0..end).rev() {
                match line[i] {
                    b')' => closing += 1,
                    b'(' => closing -= 1,
                    _ => {}
                }
            }
            if closing > 0 { end - 1 } else { end }
        }
        b';' => trim_entity(line, end),
        _ => end,
    }
}

/// `...&name;` at the end is an entity reference, cut the link before `&`.
fn trim_entity(line: &[u8], end: usize) -> usize {
    let semi = end - 1;
    let mut i = semi;
    while i > 0 && line[i - 1].is_ascii_alphanumeric() {
        i -= 1;
    }
    if i < semi && i > 0 && line[i - 1] == b'&' {
        i - 1
    } else {
        end
    }
}

fn match_email(line: &[u8]) -> Option<usize> {
    let at = run_end(line, 0, is_email_local_byte);
    if at == 0 || line.get(at) != Some(&b'@') {
        return None;
    }
    let domain_start = at + 1;
    let end = run_end(line, domain_start, is_email_domain_byte);
    memchr::memchr(b'.', &line[domain_start..end])?;

    match line[end - 1] {
        b'.' => Some(end - 1),
        b'-' | b'_' => None,
        _ => Some(end),
    }
}

/// [`InlineRecognizer`] for literal autolinks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Linkify;

impl InlineRecognizer for Linkify {
    fn name(&self) -> &'static str {
        "linkify"
    }

    fn triggers(&self) -> &[Trigger] {
        &TRIGGERS
    }

    fn scan(&self, window: Window<'_>) -> Option<Scan> {
        let m = scan(window)?;
        Some(Scan {
            consumed: m.consumed(),
            leading_text: m.prefix,
            event: InlineEvent::Autolink {
                url: m.span,
                kind: m.kind,
            },
        })
    }
}
