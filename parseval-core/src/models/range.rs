use std::cmp::Ordering::{self};
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represent a genomic range [start, end]
/// Both ends are inclusive, coordinates are 1-based as in GFF3.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Ord for Range {
    #[inline]
    fn cmp(&self, other: &Range) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl PartialOrd for Range {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Range {
    pub fn new(start: u32, end: u32) -> Self {
        Range { start, end }
    }

    /// Number of bases covered by the range.
    #[inline]
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Check if two ranges overlap (closed interval comparison)
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    #[inline]
    pub fn contains(&self, position: u32) -> bool {
        self.start <= position && position <= self.end
    }

    #[inline]
    pub fn contains_range(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest range covering both ranges.
    #[inline]
    pub fn union(&self, other: &Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Compute the intersection between two ranges, if any
    #[inline]
    pub fn intersect(&self, other: &Range) -> Option<Range> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Range { start, end })
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Range::new(1, 10), Range::new(10, 20), true)]
    #[case(Range::new(1, 10), Range::new(11, 20), false)]
    #[case(Range::new(5, 6), Range::new(1, 100), true)]
    #[case(Range::new(30, 40), Range::new(1, 29), false)]
    fn test_overlaps_is_closed(#[case] a: Range, #[case] b: Range, #[case] expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[rstest]
    fn test_len_counts_both_ends() {
        assert_eq!(Range::new(1000, 9000).len(), 8001);
        assert_eq!(Range::new(7, 7).len(), 1);
        assert_eq!(Range::new(8, 7).len(), 0);
    }

    #[rstest]
    fn test_union_and_intersect() {
        let a = Range::new(100, 200);
        let b = Range::new(150, 300);
        assert_eq!(a.union(&b), Range::new(100, 300));
        assert_eq!(a.intersect(&b), Some(Range::new(150, 200)));
        assert_eq!(a.intersect(&Range::new(201, 250)), None);
    }

    #[rstest]
    fn test_ordering_by_start_then_end() {
        let mut ranges = vec![Range::new(5, 9), Range::new(1, 4), Range::new(5, 6)];
        ranges.sort();
        assert_eq!(
            ranges,
            vec![Range::new(1, 4), Range::new(5, 6), Range::new(5, 9)]
        );
    }
}
