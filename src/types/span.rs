//! Inclusive index spans.

use std::fmt;

/// Inclusive index range `lo..=hi` along one axis.
///
/// Loop limits on a mesh block are naturally inclusive (`is..=ie`), and
/// face ranges are one longer than cell ranges, so a span is kept as a
/// plain `Copy` pair instead of a `RangeInclusive`.
///
/// ```
/// use mhd_flux::types::Span;
///
/// let cells = Span::new(2, 9);
/// assert_eq!(cells.len(), 8);
/// assert_eq!(cells.faces(), Span::new(2, 10));
/// assert_eq!(cells.extend(1), Span::new(1, 10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index (inclusive)
    pub lo: usize,
    /// Last index (inclusive)
    pub hi: usize,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    ///
    /// Panics if `hi < lo`.
    pub fn new(lo: usize, hi: usize) -> Self {
        assert!(hi >= lo, "span upper bound ({}) below lower bound ({})", hi, lo);
        Self { lo, hi }
    }

    /// Single-index span.
    #[inline]
    pub const fn single(index: usize) -> Self {
        Self { lo: index, hi: index }
    }

    /// Number of indices covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// Spans are never empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` lies inside the span.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.lo && index <= self.hi
    }

    /// Grow the span by `n` on both sides.
    ///
    /// # Panics
    ///
    /// Panics if the lower bound would go below zero.
    #[inline]
    pub fn extend(self, n: usize) -> Self {
        assert!(self.lo >= n, "cannot extend span {} by {}", self, n);
        Self {
            lo: self.lo - n,
            hi: self.hi + n,
        }
    }

    /// Face span bounding a cell span (one extra face at the top).
    #[inline]
    pub const fn faces(self) -> Self {
        Self {
            lo: self.lo,
            hi: self.hi + 1,
        }
    }

    /// Iterate over the covered indices.
    #[inline]
    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.lo..=self.hi
    }
}

impl IntoIterator for Span {
    type Item = usize;
    type IntoIter = std::ops::RangeInclusive<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.lo..=self.hi
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
