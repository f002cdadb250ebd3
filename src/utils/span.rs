//! Source location tracking

use std::fmt;
use std::sync::Arc;

/// A named piece of source text (a file, or a synthetic `<stdin>` marker)
#[derive(Debug, PartialEq, Eq)]
pub struct SourceUnit {
    /// Display name
    pub label: String,
    /// Full text of the submission
    pub content: String,
}

impl SourceUnit {
    /// Create a shared source unit
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            label: label.into(),
            content: content.into(),
        })
    }

    /// The text of the 0-indexed line `line`, without its terminator
    pub fn line(&self, line: usize) -> Option<&str> {
        self.content.split('\n').nth(line)
    }
}

/// A position of a character in a source unit, all fields 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Character offset from the start of the text
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }

    /// Step over `c`
    pub fn advance(&mut self, c: char) {
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

/// A span between two positions of the same source unit.
///
/// `end` is the position right after the last spanned character, so an
/// interval with `start == end` is zero-width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: Position,
    pub end: Position,
    pub source: Arc<SourceUnit>,
}

impl Interval {
    pub fn new(start: Position, end: Position, source: Arc<SourceUnit>) -> Self {
        Self { start, end, source }
    }

    /// A zero-width interval at `pos`
    pub fn point(pos: Position, source: Arc<SourceUnit>) -> Self {
        Self::new(pos, pos, source)
    }

    /// Span from the start of `self` to the end of `other`
    pub fn merge(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start,
            end: other.end,
            source: Arc::clone(&self.source),
        }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered text
    pub fn text(&self) -> String {
        self.source
            .content
            .chars()
            .skip(self.start.offset)
            .take(self.len())
            .collect()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source.label,
            self.start.line + 1,
            self.start.column + 1
        )
    }
}
