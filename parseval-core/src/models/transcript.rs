use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::TranscriptError;
use crate::models::{Range, Strand};

/// Which end of the coding sequence an untranslated region sits on.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UtrKind {
    FivePrime,
    ThreePrime,
}

/// An exonic stretch outside the CDS of its transcript.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtrSegment {
    pub range: Range,
    pub kind: UtrKind,
}

///
/// One annotated transcript (gene model): a range on a sequence, a strand,
/// ordered exons and the CDS segments that code for protein.
///
/// A CDS split across several exons is stored as several segments that share
/// this transcript as their parent; see [`Transcript::is_multi_cds`].
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transcript {
    pub id: String,
    pub seqid: String,
    pub gene_id: Option<String>,
    pub range: Range,
    pub strand: Strand,
    exons: Vec<Range>,
    cds: Vec<Range>,
}

impl Transcript {
    pub fn new(
        id: impl Into<String>,
        seqid: impl Into<String>,
        range: Range,
        strand: Strand,
    ) -> Self {
        Self {
            id: id.into(),
            seqid: seqid.into(),
            gene_id: None,
            range,
            strand,
            exons: Vec::new(),
            cds: Vec::new(),
        }
    }

    pub fn with_gene_id(mut self, gene_id: impl Into<String>) -> Self {
        self.gene_id = Some(gene_id.into());
        self
    }

    pub fn with_exons(mut self, exons: impl IntoIterator<Item = Range>) -> Self {
        for exon in exons {
            self.add_exon(exon);
        }
        self
    }

    pub fn with_cds(mut self, cds: impl IntoIterator<Item = Range>) -> Self {
        for segment in cds {
            self.add_cds(segment);
        }
        self
    }

    pub fn add_exon(&mut self, exon: Range) {
        let pos = self.exons.partition_point(|e| e <= &exon);
        self.exons.insert(pos, exon);
    }

    pub fn add_cds(&mut self, segment: Range) {
        let pos = self.cds.partition_point(|c| c <= &segment);
        self.cds.insert(pos, segment);
    }

    /// Exons, sorted by position.
    pub fn exons(&self) -> &[Range] {
        &self.exons
    }

    /// CDS segments, sorted by position.
    pub fn cds_segments(&self) -> &[Range] {
        &self.cds
    }

    pub fn is_coding(&self) -> bool {
        !self.cds.is_empty()
    }

    /// True when the coding sequence is a single feature split into
    /// discontiguous parts.
    pub fn is_multi_cds(&self) -> bool {
        self.cds.len() > 1
    }

    ///
    /// Leftmost to rightmost coding base, regardless of strand.
    ///
    pub fn cds_hull(&self) -> Option<Range> {
        let first = self.cds.first()?;
        let end = self.cds.iter().map(|c| c.end).max().unwrap_or(first.end);
        Some(Range::new(first.start, end))
    }

    ///
    /// CDS bounds as (translation start, translation end). On the reverse
    /// strand the start is the rightmost coding base.
    ///
    pub fn cds_range(&self) -> Option<(u32, u32)> {
        let hull = self.cds_hull()?;
        if self.strand.is_reverse() {
            Some((hull.end, hull.start))
        } else {
            Some((hull.start, hull.end))
        }
    }

    /// Number of coding bases.
    pub fn cds_length(&self) -> u32 {
        self.cds.iter().map(|c| c.len()).sum()
    }

    ///
    /// Exonic parts outside the CDS hull. Left of the CDS is 5' on the
    /// forward strand and 3' on the reverse strand. Transcripts without a CDS
    /// have no UTRs.
    ///
    pub fn utr_segments(&self) -> Vec<UtrSegment> {
        let Some(hull) = self.cds_hull() else {
            return Vec::new();
        };
        let (left_kind, right_kind) = if self.strand.is_reverse() {
            (UtrKind::ThreePrime, UtrKind::FivePrime)
        } else {
            (UtrKind::FivePrime, UtrKind::ThreePrime)
        };

        let mut segments = Vec::new();
        for exon in &self.exons {
            if exon.start < hull.start {
                segments.push(UtrSegment {
                    range: Range::new(exon.start, exon.end.min(hull.start - 1)),
                    kind: left_kind,
                });
            }
            if exon.end > hull.end {
                segments.push(UtrSegment {
                    range: Range::new(exon.start.max(hull.end + 1), exon.end),
                    kind: right_kind,
                });
            }
        }
        segments
    }

    pub fn introns(&self) -> Vec<Range> {
        self.exons
            .windows(2)
            .filter(|w| w[0].end + 1 < w[1].start)
            .map(|w| Range::new(w[0].end + 1, w[1].start - 1))
            .collect()
    }

    ///
    /// Check the structure is usable for comparison: at least one exon,
    /// exons inside the transcript and disjoint, CDS inside exons.
    ///
    pub fn validate(&self) -> Result<(), TranscriptError> {
        if self.range.is_empty() {
            return Err(TranscriptError::InvalidRange {
                id: self.id.clone(),
                start: self.range.start,
                end: self.range.end,
            });
        }
        if self.exons.is_empty() {
            return Err(TranscriptError::NoExons(self.id.clone()));
        }
        for exon in &self.exons {
            if exon.is_empty() || !self.range.contains_range(exon) {
                return Err(TranscriptError::ExonOutsideTranscript {
                    id: self.id.clone(),
                    exon: exon.to_string(),
                    range: self.range.to_string(),
                });
            }
        }
        for w in self.exons.windows(2) {
            if w[0].overlaps(&w[1]) {
                return Err(TranscriptError::OverlappingExons {
                    id: self.id.clone(),
                    first: w[0].to_string(),
                    second: w[1].to_string(),
                });
            }
        }
        for segment in &self.cds {
            if !self.exons.iter().any(|e| e.contains_range(segment)) {
                return Err(TranscriptError::CdsOutsideExons {
                    id: self.id.clone(),
                    cds: segment.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}({})", self.id, self.seqid, self.range, self.strand)
    }
}

///
/// Infer the coding part of an exon from the ranges of the leftmost and
/// rightmost codons of the transcript (start and stop codon, in genomic
/// order). Returns `None` when the exon is entirely untranslated.
///
pub fn infer_cds_segment(exon: &Range, left_codon: &Range, right_codon: &Range) -> Option<Range> {
    if exon.end < left_codon.start || exon.start > right_codon.end {
        return None;
    }

    let start = if exon.overlaps(left_codon) {
        left_codon.start
    } else {
        exon.start
    };
    let end = if exon.overlaps(right_codon) {
        right_codon.end
    } else {
        exon.end
    };
    Some(Range::new(start, end))
}
