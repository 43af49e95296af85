//! Running totals over many loci.
//!
//! Each locus contributes one [`ComparisonData`]; totals for a sequence or a
//! whole annotation are sums of those. Addition is associative and
//! commutative, so loci can be combined in any order and on any thread.

use std::fmt::{self, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use parseval_core::models::{Locus, Range};
use parseval_core::utils::format_with_commas;

use crate::aggregate::LocusReport;
use crate::classify::ComparisonClass;
use crate::scoring::CliquePair;
use crate::statistics::{ComparisonStats, Rate};

/// Counts of loci, genes, transcripts and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompInfo {
    pub num_loci: u64,
    /// Loci with reference transcripts but no prediction transcripts.
    pub unique_refr_loci: u64,
    /// Loci with prediction transcripts but no reference transcripts.
    pub unique_pred_loci: u64,
    pub refr_genes: u64,
    pub pred_genes: u64,
    pub refr_transcripts: u64,
    pub pred_transcripts: u64,
    pub num_comparisons: u64,
}

impl CompInfo {
    pub fn from_locus(locus: &Locus, report: &LocusReport<'_>) -> Self {
        let refr = locus.num_refr_transcripts() as u64;
        let pred = locus.num_pred_transcripts() as u64;
        Self {
            num_loci: 1,
            unique_refr_loci: (refr > 0 && pred == 0) as u64,
            unique_pred_loci: (pred > 0 && refr == 0) as u64,
            refr_genes: locus.num_refr_genes() as u64,
            pred_genes: locus.num_pred_genes() as u64,
            refr_transcripts: refr,
            pred_transcripts: pred,
            num_comparisons: report.pairs.len() as u64,
        }
    }
}

impl Add for CompInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            num_loci: self.num_loci + other.num_loci,
            unique_refr_loci: self.unique_refr_loci + other.unique_refr_loci,
            unique_pred_loci: self.unique_pred_loci + other.unique_pred_loci,
            refr_genes: self.refr_genes + other.refr_genes,
            pred_genes: self.pred_genes + other.pred_genes,
            refr_transcripts: self.refr_transcripts + other.refr_transcripts,
            pred_transcripts: self.pred_transcripts + other.pred_transcripts,
            num_comparisons: self.num_comparisons + other.num_comparisons,
        }
    }
}

/// Size totals for the pairs that landed in one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassSummary {
    pub comparisons: u64,
    pub total_length: u64,
    pub refr_exons: u64,
    pub pred_exons: u64,
    pub refr_cds_length: u64,
    pub pred_cds_length: u64,
}

impl ClassSummary {
    pub fn from_pair(pair: &CliquePair<'_>) -> Self {
        Self {
            comparisons: 1,
            total_length: pair.len(),
            refr_exons: pair.refr().num_exons() as u64,
            pred_exons: pair.pred().num_exons() as u64,
            refr_cds_length: pair.refr().cds_length(),
            pred_cds_length: pair.pred().cds_length(),
        }
    }

    pub fn mean_length(&self) -> Rate {
        Rate::ratio(self.total_length, self.comparisons)
    }

    pub fn mean_refr_exons(&self) -> Rate {
        Rate::ratio(self.refr_exons, self.comparisons)
    }

    pub fn mean_pred_exons(&self) -> Rate {
        Rate::ratio(self.pred_exons, self.comparisons)
    }

    pub fn mean_refr_cds_length(&self) -> Rate {
        Rate::ratio(self.refr_cds_length, self.comparisons)
    }

    pub fn mean_pred_cds_length(&self) -> Rate {
        Rate::ratio(self.pred_cds_length, self.comparisons)
    }
}

impl Add for ClassSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            comparisons: self.comparisons + other.comparisons,
            total_length: self.total_length + other.total_length,
            refr_exons: self.refr_exons + other.refr_exons,
            pred_exons: self.pred_exons + other.pred_exons,
            refr_cds_length: self.refr_cds_length + other.refr_cds_length,
            pred_cds_length: self.pred_cds_length + other.pred_cds_length,
        }
    }
}

/// A [`ClassSummary`] for each of the six classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompSummary {
    classes: [ClassSummary; 6],
}

impl CompSummary {
    ///
    /// Summary for `class`. Unclassified pairs are never counted, so that
    /// class always reads as empty.
    ///
    pub fn get(&self, class: ComparisonClass) -> ClassSummary {
        self.classes.get(class.rank()).copied().unwrap_or_default()
    }

    pub fn record(&mut self, pair: &CliquePair<'_>) {
        if let Some(slot) = self.classes.get_mut(pair.class().rank()) {
            *slot = *slot + ClassSummary::from_pair(pair);
        }
    }

    pub fn total_comparisons(&self) -> u64 {
        self.classes.iter().map(|c| c.comparisons).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComparisonClass, &ClassSummary)> {
        ComparisonClass::ALL.into_iter().zip(self.classes.iter())
    }
}

impl Add for CompSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut classes = self.classes;
        for (slot, summary) in classes.iter_mut().zip(other.classes) {
            *slot = *slot + summary;
        }
        Self { classes }
    }
}

/// Everything worth accumulating across loci.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonData {
    pub info: CompInfo,
    pub summary: CompSummary,
    pub stats: ComparisonStats,
}

impl ComparisonData {
    pub fn from_report(locus: &Locus, report: &LocusReport<'_>) -> Self {
        let mut data = Self {
            info: CompInfo::from_locus(locus, report),
            ..Default::default()
        };
        for pair in &report.pairs {
            data.summary.record(pair);
            if let Some(stats) = pair.stats() {
                data.stats += *stats;
            }
        }
        data
    }
}

impl Add for ComparisonData {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            info: self.info + other.info,
            summary: self.summary + other.summary,
            stats: self.stats + other.stats,
        }
    }
}

impl AddAssign for ComparisonData {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for ComparisonData {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ComparisonData::default(), Add::add)
    }
}

/// One row of a per-sequence locus listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocusSummary {
    pub seqid: String,
    pub range: Range,
    pub refr_transcripts: usize,
    pub pred_transcripts: usize,
    /// Pair counts indexed by [`ComparisonClass::rank`].
    pub class_counts: [usize; 6],
}

impl LocusSummary {
    pub fn from_report(locus: &Locus, report: &LocusReport<'_>) -> Self {
        let mut class_counts = [0; 6];
        for pair in &report.pairs {
            if let Some(count) = class_counts.get_mut(pair.class().rank()) {
                *count += 1;
            }
        }
        Self {
            seqid: locus.seqid.clone(),
            range: locus.range,
            refr_transcripts: locus.num_refr_transcripts(),
            pred_transcripts: locus.num_pred_transcripts(),
            class_counts,
        }
    }

    pub fn count(&self, class: ComparisonClass) -> usize {
        self.class_counts.get(class.rank()).copied().unwrap_or(0)
    }
}

impl Display for LocusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t",
            self.seqid,
            format_with_commas(self.range.start as u64),
            format_with_commas(self.range.end as u64),
            format_with_commas(self.range.len() as u64),
            self.refr_transcripts,
            self.pred_transcripts
        )?;

        let classes: Vec<String> = ComparisonClass::ALL
            .iter()
            .filter(|c| self.count(**c) > 0)
            .map(|c| format!("{}={}", c.key(), self.count(*c)))
            .collect();
        if classes.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&classes.join(","))
        }
    }
}
