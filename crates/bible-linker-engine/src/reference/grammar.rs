use log::debug;

use crate::text::Cursor;

/// Longest verse range that is expanded; wider ranges are dropped.
///
/// Psalm 119 has 176 verses, so no real range comes close.
pub const MAX_RANGE_SPAN: u32 = 500;

/// Chapter and verse list parsed from the text following a book name.
pub type ChapterAndVerses = (Option<u32>, Vec<String>);

/// Parses `<digits>(":"<verseList>)?` covering the whole of `remainder`.
///
/// An empty remainder is a whole-book reference. Anything that does not
/// fit the grammar yields `None`.
pub fn parse_chapter_and_verses(remainder: &str) -> Option<ChapterAndVerses> {
    let remainder = remainder.trim();
    if remainder.is_empty() {
        return Some((None, Vec::new()));
    }

    let mut cur = Cursor::new(remainder);
    let digits = cur.take_while(|b| b.is_ascii_digit());
    if digits.is_empty() {
        return None;
    }
    let chapter: u32 = digits.parse().ok()?;

    if cur.eof() {
        return Some((Some(chapter), Vec::new()));
    }
    if !cur.eat(b':') {
        return None;
    }

    let list = cur.rest();
    if !is_verse_list(list) {
        return None;
    }
    Some((Some(chapter), expand_verse_list(list)))
}

/// Checks `<token>(","<token>)*` where a token is `<int>` or `<int>-<int>`.
///
/// Whitespace around commas and hyphens is allowed.
fn is_verse_list(list: &str) -> bool {
    let mut cur = Cursor::new(list);
    loop {
        cur.skip_whitespace();
        if !eat_number(&mut cur) {
            return false;
        }
        cur.skip_whitespace();
        if cur.eat(b'-') {
            cur.skip_whitespace();
            if !eat_number(&mut cur) {
                return false;
            }
            cur.skip_whitespace();
        }
        if cur.eof() {
            return true;
        }
        if !cur.eat(b',') {
            return false;
        }
    }
}

fn eat_number(cur: &mut Cursor<'_>) -> bool {
    !cur.take_while(|b| b.is_ascii_digit()).is_empty()
}

/// Expands a comma-separated verse list into individual verse numbers.
///
/// `a-b` with `a <= b` expands to every verse in between. Reversed ranges,
/// zero and unparsable tokens produce nothing.
pub fn expand_verse_list(text: &str) -> Vec<String> {
    let mut verses = Vec::new();

    for token in text.split(',').map(str::trim) {
        match token.split_once('-') {
            Some((start, end)) => match (parse_verse(start), parse_verse(end)) {
                (Some(start), Some(end)) if start <= end && end - start < MAX_RANGE_SPAN => {
                    verses.extend((start..=end).map(|v| v.to_string()));
                }
                _ => debug!("Dropping verse range {token:?}"),
            },
            None => match parse_verse(token) {
                Some(verse) => verses.push(verse.to_string()),
                None => debug!("Dropping verse token {token:?}"),
            },
        }
    }

    verses
}

fn parse_verse(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&v| v != 0)
}
