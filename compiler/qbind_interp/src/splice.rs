//! Interval splicing: replace byte spans of the original text in one pass.

use crate::{InterpError, InterpResult};

/// A span of the original text and its replacement.
///
/// Both ends are inclusive, matching [`qbind_ir::Location`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    pub a: u32,
    pub b: u32,
    pub sub: String,
}

impl Interval {
    pub fn new(a: u32, b: u32, sub: impl Into<String>) -> Self {
        Interval {
            a,
            b,
            sub: sub.into(),
        }
    }
}

/// Replace every interval's span in `text` with its `sub`.
///
/// Intervals may arrive in any order; they are sorted by start first. Text
/// outside every interval is copied verbatim. Intervals must be in bounds,
/// non-overlapping and on character boundaries.
pub fn splice(text: &str, mut intervals: Vec<Interval>) -> InterpResult<String> {
    if intervals.is_empty() {
        return Ok(text.to_owned());
    }
    intervals.sort_by_key(|iv| iv.a);

    let extra: usize = intervals.iter().map(|iv| iv.sub.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut offset = 0usize;
    let mut prev_b: Option<u32> = None;

    for iv in &intervals {
        let start = iv.a as usize;
        let end = iv.b as usize + 1;
        if iv.a > iv.b || end > text.len() {
            return Err(InterpError::IntervalOutOfBounds {
                a: iv.a,
                b: iv.b,
                len: text.len(),
            });
        }
        if let Some(prev_b) = prev_b.filter(|&p| iv.a <= p) {
            return Err(InterpError::IntervalOverlap {
                a: iv.a,
                b: iv.b,
                prev_b,
            });
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(InterpError::IntervalNotCharBoundary { a: iv.a, b: iv.b });
        }

        out.push_str(&text[offset..start]);
        out.push_str(&iv.sub);
        offset = end;
        prev_b = Some(iv.b);
    }
    out.push_str(&text[offset..]);

    tracing::trace!(intervals = intervals.len(), "spliced query text");
    Ok(out)
}
