use log::trace;

use parseval_core::models::{Range, Transcript, TranscriptClique};

use crate::classify::{ComparisonClass, classify};
use crate::errors::{CompareError, CompareResult};
use crate::models::ModelVector;
use crate::statistics::{ComparisonStats, NucleotideComparison, Rate, StructuralStats};

///
/// One reference clique compared against one prediction clique over the
/// union of their ranges.
///
/// A pair starts out unscored. [`CliquePair::score`] fills in the model
/// vectors and statistics, and [`CliquePair::classify`] assigns the class.
///
#[derive(Debug, Clone)]
pub struct CliquePair<'a> {
    refr: TranscriptClique<'a>,
    pred: TranscriptClique<'a>,
    range: Range,
    refr_vector: Option<ModelVector>,
    pred_vector: Option<ModelVector>,
    stats: Option<ComparisonStats>,
    class: ComparisonClass,
}

impl<'a> CliquePair<'a> {
    pub fn new(refr: TranscriptClique<'a>, pred: TranscriptClique<'a>) -> CompareResult<Self> {
        let range = match (refr.range(), pred.range()) {
            (Some(r), Some(p)) => r.union(&p),
            (Some(r), None) => r,
            (None, Some(p)) => p,
            (None, None) => return Err(CompareError::EmptyPair),
        };
        Ok(Self {
            refr,
            pred,
            range,
            refr_vector: None,
            pred_vector: None,
            stats: None,
            class: ComparisonClass::Unclassified,
        })
    }

    pub fn refr(&self) -> &TranscriptClique<'a> {
        &self.refr
    }

    pub fn pred(&self) -> &TranscriptClique<'a> {
        &self.pred
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn len(&self) -> u64 {
        self.range.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn refr_vector(&self) -> Option<&ModelVector> {
        self.refr_vector.as_ref()
    }

    pub fn pred_vector(&self) -> Option<&ModelVector> {
        self.pred_vector.as_ref()
    }

    /// `None` until the pair is scored.
    pub fn stats(&self) -> Option<&ComparisonStats> {
        self.stats.as_ref()
    }

    pub fn class(&self) -> ComparisonClass {
        self.class
    }

    pub fn is_scored(&self) -> bool {
        self.stats.is_some()
    }

    ///
    /// Build both model vectors and compute structural and nucleotide
    /// statistics. Scoring again recomputes the same values.
    ///
    pub fn score(&mut self) -> &ComparisonStats {
        let refr_vector = ModelVector::from_clique(&self.refr, self.range);
        let pred_vector = ModelVector::from_clique(&self.pred, self.range);

        let refr_utrs: Vec<Range> = self.refr.utr_segments().iter().map(|u| u.range).collect();
        let pred_utrs: Vec<Range> = self.pred.utr_segments().iter().map(|u| u.range).collect();

        let stats = ComparisonStats {
            cds_structure: StructuralStats::from_units(
                &self.refr.cds_segments(),
                &self.pred.cds_segments(),
            ),
            exon_structure: StructuralStats::from_units(&self.refr.exons(), &self.pred.exons()),
            utr_structure: StructuralStats::from_units(&refr_utrs, &pred_utrs),
            nucleotide: NucleotideComparison::from_vectors(&refr_vector, &pred_vector),
        };
        trace!(
            "scored {:?} vs. {:?} over {}: identity {}",
            self.refr.ids(),
            self.pred.ids(),
            self.range,
            stats.overall_identity()
        );

        self.refr_vector = Some(refr_vector);
        self.pred_vector = Some(pred_vector);
        self.stats.insert(stats)
    }

    /// Classify a scored pair. Fails on a pair that has not been scored.
    pub fn classify(&mut self) -> CompareResult<ComparisonClass> {
        let stats = self.stats.as_ref().ok_or_else(|| CompareError::Unclassified {
            refr: self.refr.ids().join(","),
            pred: self.pred.ids().join(","),
        })?;
        self.class = classify(stats);
        Ok(self.class)
    }

    /// Shorthand for scoring then classifying.
    pub fn evaluate(&mut self) -> CompareResult<ComparisonClass> {
        self.score();
        self.classify()
    }

    pub fn overall_identity(&self) -> Rate {
        self.stats
            .as_ref()
            .map_or(Rate::Undefined, |s| s.overall_identity())
    }

    pub fn is_perfect_match(&self) -> bool {
        self.class == ComparisonClass::PerfectMatch
    }

    /// One-line outcome for listings.
    pub fn summary(&self) -> String {
        if self.is_perfect_match() {
            return "Gene structures match perfectly!".to_string();
        }
        format!(
            "{}; overall identity {}",
            self.class.label(),
            self.overall_identity()
        )
    }
}

///
/// Dissimilarity of two transcripts' coding sequences: the nucleotide-level
/// annotation edit distance of the CDS track over the transcripts' combined
/// range. Undefined when neither transcript codes.
///
pub fn edit_distance(t1: &Transcript, t2: &Transcript) -> Rate {
    let mut pair = CliquePair {
        refr: TranscriptClique::single(t1),
        pred: TranscriptClique::single(t2),
        range: t1.range.union(&t2.range),
        refr_vector: None,
        pred_vector: None,
        stats: None,
        class: ComparisonClass::Unclassified,
    };
    pair.score().nucleotide.cds.edit_distance()
}

///
/// Total CDS edit distance over every overlapping pair of `transcripts`, a
/// measure of how much isoforms of one gene disagree. Undefined distances
/// add nothing.
///
pub fn splice_complexity(transcripts: &[Transcript]) -> f64 {
    let mut complexity = 0.0;
    for (i, a) in transcripts.iter().enumerate() {
        for b in &transcripts[i + 1..] {
            if !a.range.overlaps(&b.range) {
                continue;
            }
            if let Some(distance) = edit_distance(a, b).value() {
                complexity += distance;
            }
        }
    }
    complexity
}
