use crate::link::WikiLink;
use crate::text::{Cursor, Span};

const TICK: u8 = b'`';

/// Finds regions of a document the scanner must leave untouched.
///
/// Two kinds of region are protected:
/// - code spans (backtick-delimited), which also suppress link detection
///   inside them, so `` `[[x]]` `` is one code span
/// - existing wiki links `[[...]]`
///
/// Unclosed constructs are ordinary text. Spans are returned in document order.
pub fn protected_spans(s: &str) -> Vec<Span> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(span) = try_code_span(&mut cur) {
            out.push(span);
            continue;
        }
        if let Some(span) = try_wikilink(&mut cur) {
            out.push(span);
            continue;
        }
        cur.bump();
    }

    out
}

/// On failure the cursor is restored.
fn try_code_span(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    while !cur.eof() && cur.peek() != Some(TICK) {
        cur.bump();
    }

    if !cur.eat(TICK) {
        *cur = saved;
        return None;
    }
    Some(Span {
        start,
        end: cur.pos(),
    })
}

/// On failure the cursor is restored.
fn try_wikilink(cur: &mut Cursor<'_>) -> Option<Span> {
    let open = WikiLink::OPEN.as_bytes();
    let close = WikiLink::CLOSE.as_bytes();
    if !cur.starts_with(open) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open.len());
    while !cur.eof() && !cur.starts_with(close) {
        cur.bump();
    }

    if !cur.starts_with(close) {
        *cur = saved;
        return None;
    }
    cur.bump_n(close.len());
    Some(Span {
        start,
        end: cur.pos(),
    })
}
