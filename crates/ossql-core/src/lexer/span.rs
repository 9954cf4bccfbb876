//! Source location tracking for tokens and AST nodes.

/// Represents a span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Returns the 1-based line and column of the span start in `source`.
    ///
    /// Columns count characters, not bytes. Offsets past the end of `source`
    /// resolve to the position just after the last character.
    #[must_use]
    pub fn location(&self, source: &str) -> (usize, usize) {
        let offset = self.start.min(source.len());
        let mut line = 1;
        let mut column = 1;
        for (idx, c) in source.char_indices() {
            if idx >= offset {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
