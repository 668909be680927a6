//! Inline parser.
//!
//! Walks inline text once and hands the cursor to recognizers at their
//! trigger bytes:
//! 1. Dispatch: a 256-entry table maps each byte to the recognizers it
//!    triggers, in priority order; line starts have their own list.
//! 2. Scan: the first recognizer returning a [`Scan`] wins. Scans are pure,
//!    so a declined attempt leaves no trace.
//! 3. Commit: leading text is merged into the pending text run, the event is
//!    emitted and the cursor advances, once per scan.
//!
//! Bytes no recognizer claims accumulate into coalesced [`InlineEvent::Text`]
//! runs, so the emitted events tile the input exactly.

pub mod autolink;
mod code_span;
pub mod event;
pub mod recognizer;

pub use autolink::Linkify;
pub use code_span::CodeSpan;
pub use event::{Autolink, AutolinkKind, InlineEvent};
pub use recognizer::{InlineRecognizer, Priority, Scan, Trigger, Window};

use smallvec::SmallVec;

use crate::cursor::Cursor;
use crate::{Options, Range};

/// Recognizer indices, in priority order.
type Candidates = SmallVec<[u16; 4]>;

struct Registered {
    recognizer: Box<dyn InlineRecognizer>,
    priority: Priority,
}

/// Inline parser with a fixed set of registered recognizers.
///
/// Parsing takes `&self`; one configured parser can be shared across threads.
pub struct InlineParser {
    /// Sorted by priority; equal priorities keep registration order.
    recognizers: Vec<Registered>,
    by_byte: Vec<Candidates>,
    line_start: Candidates,
}

impl InlineParser {
    /// A parser with no recognizers: everything is text.
    pub fn empty() -> Self {
        Self {
            recognizers: Vec::new(),
            by_byte: vec![Candidates::new(); 256],
            line_start: Candidates::new(),
        }
    }

    /// A parser with every built-in recognizer.
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// A parser with the built-in recognizers `options` enables.
    pub fn with_options(options: &Options) -> Self {
        let mut parser = Self::empty();
        if options.code_spans {
            parser.register(Box::new(CodeSpan), Priority::CODE_SPAN);
        }
        if options.autolink_literals {
            parser.register(Box::new(Linkify), Priority::LINKIFY);
        }
        parser
    }

    /// Register a recognizer. Among recognizers sharing a trigger, lower
    /// priority values are tried first.
    pub fn register(&mut self, recognizer: Box<dyn InlineRecognizer>, priority: Priority) {
        log::debug!(
            "registering inline recognizer {} at priority {}",
            recognizer.name(),
            priority.0
        );
        let at = self.recognizers.partition_point(|r| r.priority <= priority);
        self.recognizers.insert(at, Registered { recognizer, priority });
        self.rebuild_dispatch();
    }

    /// Registered recognizers in the order they are tried.
    pub fn registered(&self) -> impl Iterator<Item = (&'static str, Priority)> + '_ {
        self.recognizers
            .iter()
            .map(|r| (r.recognizer.name(), r.priority))
    }

    /// Whether any recognizer fires on `b`.
    #[inline]
    pub fn is_trigger(&self, b: u8) -> bool {
        !self.by_byte[b as usize].is_empty()
    }

    fn rebuild_dispatch(&mut self) {
        for candidates in &mut self.by_byte {
            candidates.clear();
        }
        self.line_start.clear();

        for (idx, reg) in self.recognizers.iter().enumerate() {
            debug_assert!(idx <= u16::MAX as usize);
            let idx = idx as u16;
            for &trigger in reg.recognizer.triggers() {
                for b in (0..=u8::MAX).filter(|&b| trigger.matches_byte(b)) {
                    push_unique(&mut self.by_byte[b as usize], idx);
                }
                if trigger == Trigger::Space {
                    push_unique(&mut self.line_start, idx);
                }
            }
        }
    }

    /// Parse inline content, appending events to `events`.
    ///
    /// Ranges are offsets into `text`.
    pub fn parse(&self, text: &[u8], events: &mut Vec<InlineEvent>) {
        let mut cur = Cursor::new(text);
        let mut pending = Range::empty_at(0);

        while let Some(b) = cur.peek() {
            if let Some(scan) = self.try_recognizers(&cur, b) {
                Self::commit(&mut cur, &mut pending, scan, events);
                continue;
            }
            cur.bump();
            pending.extend_to(cur.offset() as u32);
        }

        merge_text(events, pending);
    }

    /// First scan, in priority order, among recognizers triggered here.
    fn try_recognizers(&self, cur: &Cursor<'_>, b: u8) -> Option<Scan> {
        let by_byte = &self.by_byte[b as usize];
        let at_line_start = !self.line_start.is_empty() && cur.is_line_start();
        if by_byte.is_empty() && !at_line_start {
            return None;
        }

        let window = cur.window();
        let attempt = |&idx: &u16| {
            let reg = &self.recognizers[idx as usize];
            let scan = reg.recognizer.scan(window)?;
            // A scan that would stall or overrun the cursor is a decline.
            if scan.consumed == 0 || scan.consumed > window.len() {
                debug_assert!(false, "{} returned an invalid scan", reg.recognizer.name());
                return None;
            }
            log::trace!(
                "{} consumed {} bytes at {}",
                reg.recognizer.name(),
                scan.consumed,
                window.base()
            );
            Some(scan)
        };

        if at_line_start {
            merge_candidates(by_byte, &self.line_start).iter().find_map(attempt)
        } else {
            by_byte.iter().find_map(attempt)
        }
    }

    fn commit(
        cur: &mut Cursor<'_>,
        pending: &mut Range,
        scan: Scan,
        events: &mut Vec<InlineEvent>,
    ) {
        if let Some(lead) = scan.leading_text {
            debug_assert_eq!(lead.start, pending.end);
            pending.extend_to(lead.end);
        }
        let end = (cur.offset() + scan.consumed) as u32;
        match scan.event {
            InlineEvent::Text(r) => pending.extend_to(r.end),
            event => {
                merge_text(events, *pending);
                events.push(event);
                *pending = Range::empty_at(end);
            }
        }
        cur.advance(scan.consumed);
    }
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InlineParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.registered()).finish()
    }
}

/// Fold `range` into the text run at the end of `events`, or start a new one.
///
/// Empty ranges are dropped.
pub fn merge_text(events: &mut Vec<InlineEvent>, range: Range) {
    if range.is_empty() {
        return;
    }
    if let Some(InlineEvent::Text(last)) = events.last_mut() {
        if last.end == range.start {
            last.extend_to(range.end);
            return;
        }
    }
    events.push(InlineEvent::Text(range));
}

fn push_unique(candidates: &mut Candidates, idx: u16) {
    if candidates.last() != Some(&idx) {
        candidates.push(idx);
    }
}

/// Union of two ascending index lists, still ascending.
fn merge_candidates(a: &[u16], b: &[u16]) -> Candidates {
    let mut out = Candidates::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let next = match (a.get(i), b.get(j)) {
            (Some(&x), Some(&y)) if x == y => {
                i += 1;
                j += 1;
                x
            }
            (Some(&x), Some(&y)) if x < y => {
                i += 1;
                x
            }
            (_, Some(&y)) => {
                j += 1;
                y
            }
            (Some(&x), None) => {
                i += 1;
                x
            }
            (None, None) => break,
        };
        out.push(next);
    }
    out
}
