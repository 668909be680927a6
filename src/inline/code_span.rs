//! Code span recognition.
//!
//! Code spans are raw zones: nothing else is recognized inside them, so an
//! autolink can never start between the backticks. Backtick runs must match
//! exactly.

use crate::cursor::Cursor;
use crate::limits::MAX_CODE_SPAN_BACKTICKS;

use super::InlineEvent;
use super::recognizer::{InlineRecognizer, Scan, Trigger, Window};

const TICK: u8 = b'`';
const TRIGGERS: [Trigger; 1] = [Trigger::Byte(TICK)];

/// [`InlineRecognizer`] for `` `code` `` spans.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeSpan;

impl InlineRecognizer for CodeSpan {
    fn name(&self) -> &'static str {
        "code_span"
    }

    fn triggers(&self) -> &[Trigger] {
        &TRIGGERS
    }

    fn scan(&self, window: Window<'_>) -> Option<Scan> {
        let bytes = window.bytes();
        let mut cur = Cursor::new(bytes);
        let opener_len = cur.skip_while(|b| b == TICK);
        if opener_len == 0 {
            return None;
        }

        // An unmatched run is literal text, consumed whole so a shorter run
        // inside it cannot pair up with a later closer.
        let literal = Scan {
            consumed: opener_len,
            leading_text: None,
            event: InlineEvent::Text(window.absolute(0, opener_len)),
        };
        if opener_len > MAX_CODE_SPAN_BACKTICKS {
            return Some(literal);
        }

        let Some(closer) = find_closer(&mut cur, opener_len) else {
            return Some(literal);
        };
        let (content_start, content_end) = strip_padding(bytes, opener_len, closer);
        let end = closer + opener_len;

        Some(Scan {
            consumed: end,
            leading_text: None,
            event: InlineEvent::Code {
                full: window.absolute(0, end),
                content: window.absolute(content_start, content_end),
            },
        })
    }
}

/// Position of the next backtick run exactly `len` long.
fn find_closer(cur: &mut Cursor<'_>, len: usize) -> Option<usize> {
    while let Some(skip) = cur.find(TICK) {
        cur.advance(skip);
        let start = cur.offset();
        if cur.skip_while(|b| b == TICK) == len {
            return Some(start);
        }
    }
    None
}

/// One leading and one trailing space are stripped when both are present,
/// unless the content is nothing but spaces.
fn strip_padding(bytes: &[u8], start: usize, end: usize) -> (usize, usize) {
    let content = &bytes[start..end];
    let padded = content.len() >= 2
        && content.first() == Some(&b' ')
        && content.last() == Some(&b' ')
        && content.iter().any(|&b| b != b' ');
    if padded { (start + 1, end - 1) } else { (start, end) }
}
