use std::ops::Range;

/// A byte range `[start, end)` into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns true if the two spans share at least one byte.
    #[must_use]
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_half_open() {
        let span = Span { start: 4, end: 8 };
        assert!(span.overlaps(Span::from(7..9)));
        assert!(span.overlaps(Span::from(0..5)));
        assert!(span.overlaps(Span::from(5..6)));
        assert!(!span.overlaps(Span::from(8..12)));
        assert!(!span.overlaps(Span::from(0..4)));
    }

    #[test]
    fn empty_span_overlaps_nothing() {
        assert!(!Span::from(3..3).overlaps(Span::from(0..10)));
    }
}
