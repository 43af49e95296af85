use parseval_core::models::{Range, Transcript};

/// Anything with a genomic range that can take part in an [`OverlapGraph`](crate::OverlapGraph).
pub trait Ranged: Send + Sync {
    fn range(&self) -> Range;
}

impl Ranged for Range {
    #[inline]
    fn range(&self) -> Range {
        *self
    }
}

impl Ranged for Transcript {
    #[inline]
    fn range(&self) -> Range {
        self.range
    }
}

impl<T: Ranged> Ranged for &T {
    #[inline]
    fn range(&self) -> Range {
        (*self).range()
    }
}
