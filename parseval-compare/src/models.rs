use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use parseval_core::models::{Range, TranscriptClique, UtrKind};

/// Annotation state of a single nucleotide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelState {
    #[default]
    Intergenic,
    Intron,
    FivePrimeUtr,
    ThreePrimeUtr,
    Cds,
    /// Exonic but not coding and not a UTR: an exon of a transcript without
    /// CDS, or an exonic base inside the CDS hull no segment covers.
    NoncodingExon,
}

impl ModelState {
    pub fn as_char(&self) -> char {
        match self {
            ModelState::Intergenic => 'G',
            ModelState::Intron => 'I',
            ModelState::FivePrimeUtr => 'F',
            ModelState::ThreePrimeUtr => 'T',
            ModelState::Cds => 'C',
            ModelState::NoncodingExon => 'N',
        }
    }

    pub fn is_utr(&self) -> bool {
        matches!(self, ModelState::FivePrimeUtr | ModelState::ThreePrimeUtr)
    }

    pub fn is_exonic(&self) -> bool {
        self.is_utr() || matches!(self, ModelState::Cds | ModelState::NoncodingExon)
    }
}

impl From<UtrKind> for ModelState {
    fn from(kind: UtrKind) -> Self {
        match kind {
            UtrKind::FivePrime => ModelState::FivePrimeUtr,
            UtrKind::ThreePrime => ModelState::ThreePrimeUtr,
        }
    }
}

///
/// Per-base annotation of one clique over a fixed range. Position `i` of the
/// vector holds the state of nucleotide `range.start + i`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVector {
    range: Range,
    states: Vec<ModelState>,
}

impl ModelVector {
    /// A vector over `range` with every base intergenic.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            states: vec![ModelState::Intergenic; range.len() as usize],
        }
    }

    ///
    /// Paint every member of `clique` onto a fresh vector. Features are
    /// layered from coarse to fine (transcript span, exons, UTRs, CDS), so
    /// the most specific state wins. Bases outside `range` are ignored.
    ///
    pub fn from_clique(clique: &TranscriptClique<'_>, range: Range) -> Self {
        let mut vector = Self::new(range);
        for transcript in clique.transcripts() {
            vector.paint(transcript.range, ModelState::Intron);
            for exon in transcript.exons() {
                vector.paint(*exon, ModelState::NoncodingExon);
            }
            for utr in transcript.utr_segments() {
                vector.paint(utr.range, utr.kind.into());
            }
            for cds in transcript.cds_segments() {
                vector.paint(*cds, ModelState::Cds);
            }
        }
        vector
    }

    pub fn paint(&mut self, feature: Range, state: ModelState) {
        let Some(overlap) = feature.intersect(&self.range) else {
            return;
        };
        let from = (overlap.start - self.range.start) as usize;
        let to = (overlap.end - self.range.start) as usize;
        self.states[from..=to].fill(state);
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[ModelState] {
        &self.states
    }

    /// State at a genomic position, `None` outside the vector's range.
    pub fn get(&self, position: u32) -> Option<ModelState> {
        if !self.range.contains(position) {
            return None;
        }
        self.states.get((position - self.range.start) as usize).copied()
    }
}

impl Display for ModelVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded: String = self.states.iter().map(ModelState::as_char).collect();
        f.write_str(&encoded)
    }
}
