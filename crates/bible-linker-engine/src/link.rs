use std::fmt;

use crate::reference::ParsedReference;

/// Owner of the wiki-link delimiters; nothing else hardcodes `[[` or `]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";

    /// Wraps `target` in link delimiters.
    pub fn wrap(target: impl fmt::Display) -> String {
        format!("{}{target}{}", Self::OPEN, Self::CLOSE)
    }

    /// True if `text` contains either delimiter.
    pub fn contains_delimiter(text: &str) -> bool {
        text.contains(Self::OPEN) || text.contains(Self::CLOSE)
    }
}

/// Formats the link target: `Book`, `Book C` or `Book C:V,V`.
impl fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.book)?;
        if let Some(chapter) = self.chapter {
            write!(f, " {chapter}")?;
            if !self.verses.is_empty() {
                write!(f, ":{}", self.verses.join(","))?;
            }
        }
        Ok(())
    }
}

/// Renders a parse result, falling back to wrapping `raw` unchanged.
pub fn render_link(parsed: Option<&ParsedReference>, raw: &str) -> String {
    match parsed {
        Some(reference) => WikiLink::wrap(reference),
        None => WikiLink::wrap(raw),
    }
}
