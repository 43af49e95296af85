use std::collections::BTreeSet;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::{Range, Transcript};

///
/// A region of one sequence holding reference and prediction transcripts
/// that were grouped together upstream. The locus owns its transcripts;
/// everything downstream borrows them.
///
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Locus {
    pub seqid: String,
    pub range: Range,
    refr: Vec<Transcript>,
    pred: Vec<Transcript>,
}

impl Locus {
    pub fn new(
        seqid: impl Into<String>,
        range: Range,
        refr: Vec<Transcript>,
        pred: Vec<Transcript>,
    ) -> Self {
        Self {
            seqid: seqid.into(),
            range,
            refr,
            pred,
        }
    }

    ///
    /// Build a locus spanning all given transcripts. Returns `None` when both
    /// sides are empty.
    ///
    pub fn from_transcripts(
        seqid: impl Into<String>,
        refr: Vec<Transcript>,
        pred: Vec<Transcript>,
    ) -> Option<Self> {
        let range = refr
            .iter()
            .chain(pred.iter())
            .map(|t| t.range)
            .reduce(|acc, r| acc.union(&r))?;
        Some(Self::new(seqid, range, refr, pred))
    }

    pub fn refr_transcripts(&self) -> &[Transcript] {
        &self.refr
    }

    pub fn pred_transcripts(&self) -> &[Transcript] {
        &self.pred
    }

    pub fn num_refr_transcripts(&self) -> usize {
        self.refr.len()
    }

    pub fn num_pred_transcripts(&self) -> usize {
        self.pred.len()
    }

    pub fn num_refr_genes(&self) -> usize {
        count_genes(&self.refr)
    }

    pub fn num_pred_genes(&self) -> usize {
        count_genes(&self.pred)
    }

    pub fn len(&self) -> u32 {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refr.is_empty() && self.pred.is_empty()
    }
}

// transcripts without a parent gene count as their own gene
fn count_genes(transcripts: &[Transcript]) -> usize {
    let mut genes = BTreeSet::new();
    for t in transcripts {
        genes.insert(t.gene_id.as_deref().unwrap_or(t.id.as_str()));
    }
    genes.len()
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.seqid, self.range)
    }
}
