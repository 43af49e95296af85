//! Comparison statistics for a reference/prediction pair.
//!
//! Counts live in plain integers so they can be summed across pairs, loci
//! and sequences. Every derived value is a [`Rate`], which is explicitly
//! undefined when its denominator is zero instead of being `NaN` or `0.0`.

use std::fmt::{self, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::models::{ModelState, ModelVector};

/// A derived ratio that may be undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Rate {
    Defined(f64),
    #[default]
    Undefined,
}

impl Rate {
    /// `numerator / denominator`, undefined when the denominator is zero.
    pub fn ratio(numerator: u64, denominator: u64) -> Rate {
        if denominator == 0 {
            Rate::Undefined
        } else {
            Rate::Defined(numerator as f64 / denominator as f64)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Rate::Defined(v) => Some(*v),
            Rate::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Rate::Defined(_))
    }

    /// Harmonic mean of two rates.
    pub fn f1(sensitivity: Rate, specificity: Rate) -> Rate {
        match (sensitivity, specificity) {
            (Rate::Defined(sn), Rate::Defined(sp)) if sn + sp == 0.0 => Rate::Defined(0.0),
            (Rate::Defined(sn), Rate::Defined(sp)) => Rate::Defined(2.0 * sn * sp / (sn + sp)),
            _ => Rate::Undefined,
        }
    }

    /// Annotation edit distance, `1 - f1`.
    pub fn edit_distance(f1: Rate) -> Rate {
        match f1 {
            Rate::Defined(v) => Rate::Defined(1.0 - v),
            Rate::Undefined => Rate::Undefined,
        }
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Defined(v) => write!(f, "{:.3}", v),
            Rate::Undefined => f.write_str("--"),
        }
    }
}

///
/// Agreement between two collections of discrete units (CDS segments,
/// exons or UTR segments), matched by exact coordinates.
///
/// `correct + missing` is the number of reference units and
/// `correct + wrong` the number of prediction units.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuralStats {
    pub correct: u64,
    pub missing: u64,
    pub wrong: u64,
}

impl StructuralStats {
    ///
    /// Match `refr` against `pred` as multisets: a unit present twice on one
    /// side and once on the other counts one correct and one missing or
    /// wrong.
    ///
    pub fn from_units<T: Ord + Clone>(refr: &[T], pred: &[T]) -> Self {
        let mut refr = refr.to_vec();
        let mut pred = pred.to_vec();
        refr.sort();
        pred.sort();

        let mut stats = StructuralStats::default();
        let (mut i, mut j) = (0, 0);
        while i < refr.len() && j < pred.len() {
            match refr[i].cmp(&pred[j]) {
                std::cmp::Ordering::Equal => {
                    stats.correct += 1;
                    i += 1;
                    j += 1;
                }
                std::cmp::Ordering::Less => {
                    stats.missing += 1;
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    stats.wrong += 1;
                    j += 1;
                }
            }
        }
        stats.missing += (refr.len() - i) as u64;
        stats.wrong += (pred.len() - j) as u64;
        stats
    }

    pub fn refr_total(&self) -> u64 {
        self.correct + self.missing
    }

    pub fn pred_total(&self) -> u64 {
        self.correct + self.wrong
    }

    /// No missing and no wrong units.
    pub fn is_exact(&self) -> bool {
        self.missing == 0 && self.wrong == 0
    }

    pub fn sensitivity(&self) -> Rate {
        Rate::ratio(self.correct, self.refr_total())
    }

    pub fn specificity(&self) -> Rate {
        Rate::ratio(self.correct, self.pred_total())
    }

    pub fn f1(&self) -> Rate {
        Rate::f1(self.sensitivity(), self.specificity())
    }

    pub fn edit_distance(&self) -> Rate {
        Rate::edit_distance(self.f1())
    }
}

impl Add for StructuralStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            correct: self.correct + other.correct,
            missing: self.missing + other.missing,
            wrong: self.wrong + other.wrong,
        }
    }
}

impl AddAssign for StructuralStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

///
/// Per-nucleotide confusion counts for one feature track, with the
/// reference as truth.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NucleotideStats {
    pub true_positives: u64,
    pub false_negatives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
}

impl NucleotideStats {
    pub fn record(&mut self, in_refr: bool, in_pred: bool) {
        match (in_refr, in_pred) {
            (true, true) => self.true_positives += 1,
            (true, false) => self.false_negatives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
        }
    }

    pub fn matches(&self) -> u64 {
        self.true_positives + self.true_negatives
    }

    pub fn length(&self) -> u64 {
        self.matches() + self.false_negatives + self.false_positives
    }

    /// Every position agrees.
    pub fn is_perfect(&self) -> bool {
        self.false_negatives == 0 && self.false_positives == 0
    }

    pub fn sensitivity(&self) -> Rate {
        Rate::ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    pub fn specificity(&self) -> Rate {
        Rate::ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    pub fn f1(&self) -> Rate {
        Rate::f1(self.sensitivity(), self.specificity())
    }

    pub fn edit_distance(&self) -> Rate {
        Rate::edit_distance(self.f1())
    }

    pub fn matching_coefficient(&self) -> Rate {
        Rate::ratio(self.matches(), self.length())
    }

    ///
    /// Phi coefficient of the 2×2 table. Undefined when any row or column
    /// of the table sums to zero.
    ///
    pub fn correlation(&self) -> Rate {
        let tp = self.true_positives as f64;
        let fn_ = self.false_negatives as f64;
        let fp = self.false_positives as f64;
        let tn = self.true_negatives as f64;

        let marginals = [tp + fp, tp + fn_, tn + fp, tn + fn_];
        if marginals.iter().any(|&m| m == 0.0) {
            return Rate::Undefined;
        }
        let denominator = marginals.iter().product::<f64>().sqrt();
        Rate::Defined((tp * tn - fp * fn_) / denominator)
    }
}

impl Add for NucleotideStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            true_positives: self.true_positives + other.true_positives,
            false_negatives: self.false_negatives + other.false_negatives,
            false_positives: self.false_positives + other.false_positives,
            true_negatives: self.true_negatives + other.true_negatives,
        }
    }
}

impl AddAssign for NucleotideStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Nucleotide-level agreement of two model vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NucleotideComparison {
    pub cds: NucleotideStats,
    /// UTR vs. non-UTR; 5' and 3' labels are not distinguished.
    pub utr: NucleotideStats,
    pub overall_matches: u64,
    pub overall_length: u64,
    /// Positions that are UTR on both sides but with opposite labels.
    pub mislabeled_utr: u64,
}

impl NucleotideComparison {
    pub fn from_vectors(refr: &ModelVector, pred: &ModelVector) -> Self {
        let mut comparison = NucleotideComparison::default();
        for (r, p) in refr.states().iter().zip(pred.states()) {
            comparison
                .cds
                .record(*r == ModelState::Cds, *p == ModelState::Cds);
            comparison.utr.record(r.is_utr(), p.is_utr());

            comparison.overall_length += 1;
            if r == p {
                comparison.overall_matches += 1;
            } else if r.is_utr() && p.is_utr() {
                comparison.mislabeled_utr += 1;
            }
        }
        comparison
    }

    pub fn mismatches(&self) -> u64 {
        self.overall_length - self.overall_matches
    }

    pub fn overall_identity(&self) -> Rate {
        Rate::ratio(self.overall_matches, self.overall_length)
    }

    pub fn is_identical(&self) -> bool {
        self.overall_length > 0 && self.overall_matches == self.overall_length
    }
}

impl Add for NucleotideComparison {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            cds: self.cds + other.cds,
            utr: self.utr + other.utr,
            overall_matches: self.overall_matches + other.overall_matches,
            overall_length: self.overall_length + other.overall_length,
            mislabeled_utr: self.mislabeled_utr + other.mislabeled_utr,
        }
    }
}

impl AddAssign for NucleotideComparison {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Everything the scorer computes for one pair. Summable across pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonStats {
    pub cds_structure: StructuralStats,
    pub exon_structure: StructuralStats,
    pub utr_structure: StructuralStats,
    pub nucleotide: NucleotideComparison,
}

impl ComparisonStats {
    /// CDS, exon and UTR structures all agree exactly.
    pub fn structures_exact(&self) -> bool {
        self.cds_structure.is_exact()
            && self.exon_structure.is_exact()
            && self.utr_structure.is_exact()
    }

    pub fn overall_identity(&self) -> Rate {
        self.nucleotide.overall_identity()
    }
}

impl Add for ComparisonStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            cds_structure: self.cds_structure + other.cds_structure,
            exon_structure: self.exon_structure + other.exon_structure,
            utr_structure: self.utr_structure + other.utr_structure,
            nucleotide: self.nucleotide + other.nucleotide,
        }
    }
}

impl AddAssign for ComparisonStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for ComparisonStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ComparisonStats::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parseval_core::models::Range;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(3, 4, Rate::Defined(0.75))]
    #[case(0, 4, Rate::Defined(0.0))]
    #[case(0, 0, Rate::Undefined)]
    fn test_ratio(#[case] num: u64, #[case] den: u64, #[case] expected: Rate) {
        assert_eq!(Rate::ratio(num, den), expected);
    }

    #[rstest]
    #[case(Rate::Defined(0.5), "0.500")]
    #[case(Rate::Defined(1.0), "1.000")]
    #[case(Rate::Defined(2.0 / 3.0), "0.667")]
    #[case(Rate::Undefined, "--")]
    fn test_rate_display(#[case] rate: Rate, #[case] expected: &str) {
        assert_eq!(rate.to_string(), expected);
    }

    #[rstest]
    fn test_f1_edge_cases() {
        assert_eq!(
            Rate::f1(Rate::Defined(0.0), Rate::Defined(0.0)),
            Rate::Defined(0.0)
        );
        assert_eq!(Rate::f1(Rate::Defined(1.0), Rate::Undefined), Rate::Undefined);
        assert_eq!(Rate::edit_distance(Rate::Undefined), Rate::Undefined);
        assert_eq!(
            Rate::edit_distance(Rate::f1(Rate::Defined(1.0), Rate::Defined(1.0))),
            Rate::Defined(0.0)
        );
    }

    #[rstest]
    fn test_structural_multiset_matching() {
        let refr = vec![Range::new(1, 10), Range::new(20, 30), Range::new(20, 30)];
        let pred = vec![Range::new(20, 30), Range::new(40, 50)];
        let stats = StructuralStats::from_units(&refr, &pred);

        assert_eq!(
            stats,
            StructuralStats {
                correct: 1,
                missing: 2,
                wrong: 1
            }
        );
        assert_eq!(stats.refr_total(), refr.len() as u64);
        assert_eq!(stats.pred_total(), pred.len() as u64);
        assert_eq!(stats.sensitivity(), Rate::Defined(1.0 / 3.0));
        assert_eq!(stats.specificity(), Rate::Defined(0.5));
    }

    #[rstest]
    fn test_structural_empty_sides() {
        let empty: Vec<Range> = vec![];
        let stats = StructuralStats::from_units(&empty, &empty);
        assert_eq!(stats.is_exact(), true);
        assert_eq!(stats.sensitivity(), Rate::Undefined);
        assert_eq!(stats.f1(), Rate::Undefined);
        assert_eq!(stats.edit_distance().to_string(), "--");

        let one_sided = StructuralStats::from_units(&[Range::new(1, 2)], &empty);
        assert_eq!(one_sided.sensitivity(), Rate::Defined(0.0));
        assert_eq!(one_sided.specificity(), Rate::Undefined);
        assert_eq!(one_sided.f1(), Rate::Undefined);
    }

    #[rstest]
    fn test_correlation() {
        let stats = NucleotideStats {
            true_positives: 40,
            false_negatives: 10,
            false_positives: 10,
            true_negatives: 40,
        };
        assert_eq!(stats.correlation(), Rate::Defined(0.6));
        assert_eq!(stats.matching_coefficient(), Rate::Defined(0.8));

        let no_negatives = NucleotideStats {
            true_positives: 5,
            ..Default::default()
        };
        assert_eq!(no_negatives.correlation(), Rate::Undefined);
    }

    #[rstest]
    fn test_sum_of_stats() {
        let a = ComparisonStats {
            cds_structure: StructuralStats {
                correct: 2,
                missing: 1,
                wrong: 0,
            },
            ..Default::default()
        };
        let b = ComparisonStats {
            cds_structure: StructuralStats {
                correct: 1,
                missing: 0,
                wrong: 3,
            },
            ..Default::default()
        };
        let total: ComparisonStats = vec![a, b].into_iter().sum();
        assert_eq!(total, a + b);
        assert_eq!(total, b + a);
        assert_eq!(total.cds_structure.refr_total(), 4);
        assert_eq!(total.cds_structure.pred_total(), 6);
    }
}
