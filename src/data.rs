/* Data models */

use std::fmt::Display;
use std::ops::Range;

/// The input text as a sequence of Unicode scalar values.
///
/// Indices address one code point each, never raw UTF-8 bytes, so an index
/// computed against this view stays valid no matter how many bytes the
/// characters before it take. Build it once per document and hand it to
/// every scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePoints {
    chars: Vec<char>,
}

/// Half-open range `[start, end)` of code points recognized as one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// User-facing 2-dimensional position. Line is 1-based and column is 0-based,
/// both counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPosition {
    pub line: usize,
    pub column: usize,
}

impl CodePoints {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Bounds-checked access. Returns `None` past the end instead of panicking.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Collects the characters covered by `span` into a `String`.
    /// Out-of-range parts of the span are clamped to the sequence.
    pub fn slice(&self, span: Span) -> String {
        let end = span.end.min(self.len());
        let start = span.start.min(end);
        self.chars[start..end].iter().collect()
    }

    pub fn position(&self, index: usize) -> TokenPosition {
        /* Walks the prefix up to `index` to find its line and column.
         * Only used to report errors, so a linear pass is fine. */
        let mut pos = TokenPosition::default();
        for &ch in self.chars.iter().take(index) {
            if ch == '\n' {
                pos.line += 1;
                pos.column = 0;
            } else {
                pos.column += 1;
            }
        }
        pos
    }
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<&str> for CodePoints {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for CodePoints {
    fn from(source: String) -> Self {
        Self::new(&source)
    }
}

impl FromIterator<char> for CodePoints {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Display for TokenPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

impl Default for TokenPosition {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}
