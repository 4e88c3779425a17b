//! Position and location tracking for parsed objects
//!
//! This module defines the data structures for representing where an object came from in the
//! text handed to the parser, plus the conversion from character offsets to line/column pairs.
//!
//! ## Types
//!
//! - [`Range`] - A half-open character range `[start, end)`
//! - [`Position`] - A 0-indexed line:column position
//! - [`Location`] - A start/end pair of positions
//! - [`SourceLocation`] - Utility for converting character offsets to positions
//!
//! ## Key Design
//!
//! - **Characters, not bytes**: offsets count Unicode scalar values, so a range can be used to
//!   slice the `Vec<char>` of the input directly
//! - **Mandatory ranges**: every object carries a range, locations are opt-in
//! - **Efficient conversion**: O(log n) binary search for offset-to-position conversion

use serde::Serialize;
use std::fmt;

/// A half-open range of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {start} past end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if another range lies entirely within this one
    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Same range moved right by `delta` characters
    pub fn shifted(&self, delta: usize) -> Range {
        Range::new(self.start + delta, self.end + delta)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Represents a position in source text (line and column, both 0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The 1-indexed line number editors and legacy adapters display.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end positions of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from character offsets to line/column positions
pub struct SourceLocation {
    /// Character offsets where each line starts
    line_starts: Vec<usize>,
    base_line: usize,
}

impl SourceLocation {
    /// Create a new SourceLocation over the given characters
    pub fn new(chars: &[char]) -> Self {
        Self::with_base_line(chars, 0)
    }

    /// Same as [`SourceLocation::new`] but reports lines starting at `base_line`.
    pub fn with_base_line(chars: &[char], base_line: usize) -> Self {
        let mut line_starts = vec![0];
        for (offset, ch) in chars.iter().enumerate() {
            if *ch == '\n' {
                line_starts.push(offset + 1);
            }
        }
        Self {
            line_starts,
            base_line,
        }
    }

    /// Convert a character offset to a line/column position
    pub fn char_to_position(&self, offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        let column = offset - self.line_starts[line];

        Position::new(line + self.base_line, column)
    }

    /// Convert a local character range to a location
    pub fn range_to_location(&self, range: &Range) -> Location {
        Location::new(
            self.char_to_position(range.start),
            self.char_to_position(range.end),
        )
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
