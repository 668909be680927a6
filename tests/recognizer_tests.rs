use linkspan::{
    AutolinkKind, InlineEvent, InlineParser, InlineRecognizer, Linkify, Priority, Range, Scan,
    Trigger, Window,
};

/// Claims `*...*` runs verbatim, the way an emphasis recognizer would claim
/// its delimiters. Emits a code event so the claim is visible.
struct StarRun;

const STAR: [Trigger; 1] = [Trigger::Byte(b'*')];

impl InlineRecognizer for StarRun {
    fn name(&self) -> &'static str {
        "star_run"
    }

    fn triggers(&self) -> &[Trigger] {
        &STAR
    }

    fn scan(&self, window: Window<'_>) -> Option<Scan> {
        let bytes = window.bytes();
        let close = bytes.iter().skip(1).position(|&b| b == b'*')? + 1;
        if close == 1 {
            return None;
        }
        Some(Scan {
            consumed: close + 1,
            leading_text: None,
            event: InlineEvent::Code {
                full: window.absolute(0, close + 1),
                content: window.absolute(1, close),
            },
        })
    }
}

/// Fires on spaces and at line starts; claims a leading `>`.
struct LineMarker;

const LINE: [Trigger; 1] = [Trigger::Space];

impl InlineRecognizer for LineMarker {
    fn name(&self) -> &'static str {
        "line_marker"
    }

    fn triggers(&self) -> &[Trigger] {
        &LINE
    }

    fn scan(&self, window: Window<'_>) -> Option<Scan> {
        match window.first()? {
            b'>' => Some(Scan {
                consumed: 1,
                leading_text: None,
                event: InlineEvent::Code {
                    full: window.absolute(0, 1),
                    content: window.absolute(0, 1),
                },
            }),
            _ => None,
        }
    }
}

fn parse_with(parser: &InlineParser, input: &str) -> Vec<InlineEvent> {
    let mut events = Vec::new();
    parser.parse(input.as_bytes(), &mut events);
    events
}

#[test]
fn higher_priority_recognizer_wins_shared_trigger() {
    let mut parser = InlineParser::empty();
    parser.register(Box::new(Linkify), Priority::LINKIFY);
    parser.register(Box::new(StarRun), Priority(500));

    assert_eq!(
        parse_with(&parser, "*http://example.com*"),
        vec![InlineEvent::Code {
            full: Range::new(0, 20),
            content: Range::new(1, 19),
        }]
    );
}

#[test]
fn linkify_wins_when_registered_ahead() {
    let mut parser = InlineParser::empty();
    parser.register(Box::new(StarRun), Priority(1000));
    parser.register(Box::new(Linkify), Priority::LINKIFY);

    assert_eq!(
        parse_with(&parser, "*http://example.com*"),
        vec![
            InlineEvent::Text(Range::new(0, 1)),
            InlineEvent::Autolink {
                url: Range::new(1, 19),
                kind: AutolinkKind::Url,
            },
            InlineEvent::Text(Range::new(19, 20)),
        ]
    );
}

#[test]
fn declined_scan_falls_through_to_next_recognizer() {
    let mut parser = InlineParser::empty();
    parser.register(Box::new(StarRun), Priority(500));
    parser.register(Box::new(Linkify), Priority::LINKIFY);

    // No closing `*`: StarRun declines and linkify gets the trigger.
    assert_eq!(
        parse_with(&parser, "*www.example.com"),
        vec![
            InlineEvent::Text(Range::new(0, 1)),
            InlineEvent::Autolink {
                url: Range::new(1, 16),
                kind: AutolinkKind::Www,
            },
        ]
    );
}

#[test]
fn equal_priorities_keep_registration_order() {
    let mut parser = InlineParser::empty();
    parser.register(Box::new(Linkify), Priority(10));
    parser.register(Box::new(StarRun), Priority(10));
    parser.register(Box::new(LineMarker), Priority(1));

    let order: Vec<_> = parser.registered().collect();
    assert_eq!(
        order,
        [
            ("line_marker", Priority(1)),
            ("linkify", Priority(10)),
            ("star_run", Priority(10)),
        ]
    );
}

#[test]
fn space_trigger_fires_at_line_start() {
    let mut parser = InlineParser::empty();
    parser.register(Box::new(LineMarker), Priority(1));

    assert_eq!(
        parse_with(&parser, ">a\n>b"),
        vec![
            InlineEvent::Code {
                full: Range::new(0, 1),
                content: Range::new(0, 1),
            },
            InlineEvent::Text(Range::new(1, 3)),
            InlineEvent::Code {
                full: Range::new(3, 4),
                content: Range::new(3, 4),
            },
            InlineEvent::Text(Range::new(4, 5)),
        ]
    );
}

#[test]
fn default_parser_runs_linkify_last() {
    let parser = InlineParser::new();
    let (name, priority) = parser.registered().last().unwrap();
    assert_eq!(name, "linkify");
    assert_eq!(priority, Priority::LINKIFY);
}

#[test]
fn no_match_leaves_cursor_in_place() {
    let input = b"(nothing to see here";
    let mut cursor = linkspan::cursor::Cursor::new(input);
    let before = cursor.offset();
    assert!(Linkify.scan(cursor.window()).is_none());
    assert_eq!(cursor.offset(), before);

    cursor.advance(8);
    assert!(Linkify.scan(cursor.window()).is_none());
    assert_eq!(cursor.offset(), 8);
}

#[test]
fn shared_parser_across_threads() {
    let parser = InlineParser::new();
    let inputs = [
        "see http://example.com.",
        "mail a.b@example.com",
        "(www.example.org)",
        "`http://example.com`",
    ];

    let shared = &parser;
    let results: Vec<Vec<InlineEvent>> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&input| s.spawn(move || parse_with(shared, input)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (input, events) in inputs.iter().zip(&results) {
        assert_eq!(events, &parse_with(&parser, input));
    }
    assert_eq!(results[0][1].range(), Range::new(4, 22));
}
