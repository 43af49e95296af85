use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::statistics::ComparisonStats;

/// How well a prediction clique reproduces a reference clique.
///
/// Variants are declared best first; [`ComparisonClass::rank`] follows
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ComparisonClass {
    PerfectMatch,
    /// Identical apart from 5' and 3' UTR labels.
    Mislabeled,
    CdsMatch,
    ExonMatch,
    UtrMatch,
    NonMatch,
    /// Not yet scored. Never the result of [`classify`].
    #[default]
    Unclassified,
}

impl ComparisonClass {
    /// The six outcomes of [`classify`], best first.
    pub const ALL: [ComparisonClass; 6] = [
        ComparisonClass::PerfectMatch,
        ComparisonClass::Mislabeled,
        ComparisonClass::CdsMatch,
        ComparisonClass::ExonMatch,
        ComparisonClass::UtrMatch,
        ComparisonClass::NonMatch,
    ];

    /// 0 for the best class.
    pub fn rank(&self) -> usize {
        *self as usize
    }

    pub fn key(&self) -> &'static str {
        match self {
            ComparisonClass::PerfectMatch => "perfect",
            ComparisonClass::Mislabeled => "mislabeled",
            ComparisonClass::CdsMatch => "cds",
            ComparisonClass::ExonMatch => "exon",
            ComparisonClass::UtrMatch => "utr",
            ComparisonClass::NonMatch => "nonmatch",
            ComparisonClass::Unclassified => "unclassified",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonClass::PerfectMatch => "perfect matches",
            ComparisonClass::Mislabeled => "perfect matches with mislabeled UTRs",
            ComparisonClass::CdsMatch => "CDS structure matches",
            ComparisonClass::ExonMatch => "exon structure matches",
            ComparisonClass::UtrMatch => "UTR structure matches",
            ComparisonClass::NonMatch => "non-matches",
            ComparisonClass::Unclassified => "unclassified",
        }
    }
}

impl Display for ComparisonClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

///
/// Assign the best class whose condition holds, checking from
/// [`ComparisonClass::PerfectMatch`] down to [`ComparisonClass::NonMatch`].
///
pub fn classify(stats: &ComparisonStats) -> ComparisonClass {
    let nucleotide = &stats.nucleotide;

    if stats.structures_exact() && nucleotide.is_identical() {
        return ComparisonClass::PerfectMatch;
    }

    // every disagreeing base is a UTR whose 5'/3' label is swapped
    if stats.structures_exact()
        && nucleotide.cds.is_perfect()
        && nucleotide.mislabeled_utr > 0
        && nucleotide.mismatches() == nucleotide.mislabeled_utr
    {
        return ComparisonClass::Mislabeled;
    }

    if stats.cds_structure.is_exact() {
        ComparisonClass::CdsMatch
    } else if stats.exon_structure.is_exact() {
        ComparisonClass::ExonMatch
    } else if stats.utr_structure.is_exact() {
        ComparisonClass::UtrMatch
    } else {
        ComparisonClass::NonMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::{NucleotideComparison, StructuralStats};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn exact(n: u64) -> StructuralStats {
        StructuralStats {
            correct: n,
            missing: 0,
            wrong: 0,
        }
    }

    fn off() -> StructuralStats {
        StructuralStats {
            correct: 1,
            missing: 1,
            wrong: 1,
        }
    }

    fn nucleotide(length: u64, mismatches: u64, mislabeled_utr: u64) -> NucleotideComparison {
        NucleotideComparison {
            overall_matches: length - mismatches,
            overall_length: length,
            mislabeled_utr,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(exact(3), exact(4), exact(2), nucleotide(100, 0, 0), ComparisonClass::PerfectMatch)]
    #[case(exact(3), exact(4), exact(2), nucleotide(100, 20, 20), ComparisonClass::Mislabeled)]
    #[case(exact(3), exact(4), exact(2), nucleotide(100, 21, 20), ComparisonClass::CdsMatch)]
    #[case(exact(3), off(), exact(2), nucleotide(100, 5, 0), ComparisonClass::CdsMatch)]
    #[case(off(), exact(4), exact(2), nucleotide(100, 5, 0), ComparisonClass::ExonMatch)]
    #[case(off(), exact(4), off(), nucleotide(100, 5, 0), ComparisonClass::ExonMatch)]
    #[case(off(), off(), exact(2), nucleotide(100, 5, 0), ComparisonClass::UtrMatch)]
    #[case(off(), off(), off(), nucleotide(100, 5, 0), ComparisonClass::NonMatch)]
    fn test_decision_order(
        #[case] cds_structure: StructuralStats,
        #[case] exon_structure: StructuralStats,
        #[case] utr_structure: StructuralStats,
        #[case] nucleotide: NucleotideComparison,
        #[case] expected: ComparisonClass,
    ) {
        let stats = ComparisonStats {
            cds_structure,
            exon_structure,
            utr_structure,
            nucleotide,
        };
        assert_eq!(classify(&stats), expected);
    }

    #[rstest]
    fn test_rank_order() {
        let ranks: Vec<usize> = ComparisonClass::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
        assert!(ComparisonClass::PerfectMatch < ComparisonClass::NonMatch);
        assert_eq!(ComparisonClass::Unclassified.rank(), 6);
    }

    #[rstest]
    fn test_classify_never_unclassified() {
        let stats = ComparisonStats::default();
        assert_ne!(classify(&stats), ComparisonClass::Unclassified);
    }
}
