#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Ranged;

/// The way an [`OverlapGraph`] answers compatibility queries.
///
/// # Variants
///
/// * `Implicit` - compare ranges on every query. No setup cost, best for the
///   small loci that make up most annotations.
/// * `Matrix` - precompute an N×N compatibility matrix once. Trades N² memory
///   for constant-time queries on large loci.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverlapGraphType {
    #[default]
    Implicit,
    Matrix,
}

///
/// Compatibility relation over an ordered set of ranged items. Two items are
/// compatible when their closed ranges do not overlap, so they may be part of
/// the same clique.
///
/// Vertices are indices into the item slice.
///
#[derive(Debug, Clone)]
pub struct OverlapGraph<'a, T: Ranged> {
    items: &'a [T],
    matrix: Option<Vec<bool>>,
}

impl<'a, T: Ranged> OverlapGraph<'a, T> {
    pub fn new(items: &'a [T], graph_type: OverlapGraphType) -> Self {
        match graph_type {
            OverlapGraphType::Implicit => Self {
                items,
                matrix: None,
            },
            OverlapGraphType::Matrix => {
                let n = items.len();
                let mut matrix = vec![false; n * n];
                for a in 0..n {
                    for b in (a + 1)..n {
                        let compatible = !items[a].range().overlaps(&items[b].range());
                        matrix[a * n + b] = compatible;
                        matrix[b * n + a] = compatible;
                    }
                }
                Self {
                    items,
                    matrix: Some(matrix),
                }
            }
        }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn overlaps(&self, a: usize, b: usize) -> bool {
        self.items[a].range().overlaps(&self.items[b].range())
    }

    /// True when `a` and `b` are distinct and do not overlap.
    #[inline]
    pub fn compatible(&self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        match &self.matrix {
            Some(matrix) => matrix[a * self.items.len() + b],
            None => !self.overlaps(a, b),
        }
    }

    ///
    /// The members of `candidates` compatible with `v`, in candidate order.
    ///
    pub fn neighbors(&self, v: usize, candidates: &[usize]) -> Vec<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&other| self.compatible(v, other))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parseval_core::models::Range;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ranges() -> Vec<Range> {
        vec![
            Range::new(1, 5),
            Range::new(3, 7),
            Range::new(6, 10),
            Range::new(8, 12),
            Range::new(20, 30),
        ]
    }

    #[rstest]
    #[case(OverlapGraphType::Implicit)]
    #[case(OverlapGraphType::Matrix)]
    fn test_neighbors_are_non_overlapping(ranges: Vec<Range>, #[case] graph_type: OverlapGraphType) {
        let graph = OverlapGraph::new(&ranges, graph_type);
        let all: Vec<usize> = (0..ranges.len()).collect();

        assert_eq!(graph.neighbors(0, &all), vec![2, 3, 4]);
        assert_eq!(graph.neighbors(1, &all), vec![3, 4]);
        assert_eq!(graph.neighbors(4, &all), vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_vertex_is_not_its_own_neighbor(ranges: Vec<Range>) {
        let graph = OverlapGraph::new(&ranges, OverlapGraphType::Implicit);
        assert_eq!(graph.compatible(2, 2), false);
        assert_eq!(graph.neighbors(2, &[2]), Vec::<usize>::new());
    }

    #[rstest]
    fn test_touching_ranges_overlap() {
        let ranges = vec![Range::new(1, 10), Range::new(10, 20)];
        let graph = OverlapGraph::new(&ranges, OverlapGraphType::Matrix);
        assert_eq!(graph.overlaps(0, 1), true);
        assert_eq!(graph.compatible(0, 1), false);
    }

    #[rstest]
    fn test_strategies_agree(ranges: Vec<Range>) {
        let implicit = OverlapGraph::new(&ranges, OverlapGraphType::Implicit);
        let matrix = OverlapGraph::new(&ranges, OverlapGraphType::Matrix);
        for a in 0..ranges.len() {
            for b in 0..ranges.len() {
                assert_eq!(implicit.compatible(a, b), matrix.compatible(a, b));
            }
        }
    }
}
