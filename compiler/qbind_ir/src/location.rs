//! Source locations of parameter occurrences.

use std::fmt;
use std::ops::Range;

/// Byte range of one parameter occurrence in the query text.
///
/// Both ends are inclusive: the occurrence covers bytes `a..=b`. This is the
/// convention of the upstream parser, which reports the offset of the last
/// character of the occurrence rather than one past it.
///
/// `line` and `col` are carried through for diagnostics only.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub a: u32,
    pub b: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub line: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub col: Option<u32>,
}

impl Location {
    /// Create a location covering bytes `a..=b`.
    #[inline]
    pub const fn new(a: u32, b: u32) -> Self {
        Location {
            a,
            b,
            line: None,
            col: None,
        }
    }

    /// Attach a line/column pair.
    #[inline]
    #[must_use]
    pub const fn with_line_col(mut self, line: u32, col: u32) -> Self {
        self.line = Some(line);
        self.col = Some(col);
        self
    }

    /// Number of bytes covered.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.b.saturating_sub(self.a) + 1
    }

    /// Always false: an inclusive range covers at least one byte.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Half-open byte range, suitable for slicing.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.a as usize..self.b as usize + 1
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.a, self.b)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.col) {
            (Some(line), Some(col)) => write!(f, "{line}:{col}"),
            _ => write!(f, "{}..={}", self.a, self.b),
        }
    }
}
