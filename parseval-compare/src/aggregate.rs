use std::cmp::Ordering;

use fxhash::FxHashSet;
use log::debug;

use parseval_core::models::{Transcript, TranscriptClique};

use crate::errors::CompareResult;
use crate::scoring::CliquePair;

///
/// Outcome of comparing one locus: the reference/prediction pairs chosen
/// for reporting, in selection order, and the cliques of transcripts that
/// ended up in no pair.
///
#[derive(Debug, Clone, Default)]
pub struct LocusReport<'a> {
    pub pairs: Vec<CliquePair<'a>>,
    pub unique_refr: Vec<TranscriptClique<'a>>,
    pub unique_pred: Vec<TranscriptClique<'a>>,
}

impl LocusReport<'_> {
    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }
}

type TranscriptKey = *const Transcript;

fn key(transcript: &Transcript) -> TranscriptKey {
    transcript as TranscriptKey
}

fn all_unused(clique: &TranscriptClique<'_>, used: &FxHashSet<TranscriptKey>) -> bool {
    clique.transcripts().iter().all(|t| !used.contains(&key(t)))
}

fn mark_used(clique: &TranscriptClique<'_>, used: &mut FxHashSet<TranscriptKey>) {
    used.extend(clique.transcripts().iter().map(|t| key(t)));
}

// best class first, then higher identity, then enumeration order
fn selection_order(a: &(usize, usize, CliquePair<'_>), b: &(usize, usize, CliquePair<'_>)) -> Ordering {
    let identity = |pair: &CliquePair<'_>| pair.overall_identity().value().unwrap_or(0.0);
    a.2.class()
        .rank()
        .cmp(&b.2.class().rank())
        .then_with(|| identity(&b.2).total_cmp(&identity(&a.2)))
        .then_with(|| a.0.cmp(&b.0))
        .then_with(|| a.1.cmp(&b.1))
}

///
/// Pair up reference and prediction cliques for one locus.
///
/// Every reference clique is scored against every prediction clique whose
/// range overlaps it. Pairs are then taken greedily, best class first
/// (ties broken by higher overall identity, then lower reference clique
/// index, then lower prediction clique index), skipping any pair that
/// reuses a transcript already reported. Transcripts left over are
/// reported once each, through the first clique made only of leftovers.
///
/// When either side has no cliques, every clique of the other side is
/// unique and no pairs are formed.
///
/// Fails without a report if any clique holds overlapping transcripts.
///
pub fn aggregate<'a>(
    refr_cliques: &[TranscriptClique<'a>],
    pred_cliques: &[TranscriptClique<'a>],
) -> CompareResult<LocusReport<'a>> {
    if refr_cliques.is_empty() || pred_cliques.is_empty() {
        return Ok(LocusReport {
            pairs: Vec::new(),
            unique_refr: refr_cliques.to_vec(),
            unique_pred: pred_cliques.to_vec(),
        });
    }

    for clique in refr_cliques.iter().chain(pred_cliques) {
        clique.validate()?;
    }

    let mut candidates = Vec::new();
    for (i, refr) in refr_cliques.iter().enumerate() {
        for (j, pred) in pred_cliques.iter().enumerate() {
            let (Some(r), Some(p)) = (refr.range(), pred.range()) else {
                continue;
            };
            if !r.overlaps(&p) {
                continue;
            }
            let mut pair = CliquePair::new(refr.clone(), pred.clone())?;
            pair.evaluate()?;
            candidates.push((i, j, pair));
        }
    }
    candidates.sort_by(selection_order);

    let mut used_refr = FxHashSet::default();
    let mut used_pred = FxHashSet::default();
    let mut pairs = Vec::new();
    for (i, j, pair) in candidates {
        if !all_unused(pair.refr(), &used_refr) || !all_unused(pair.pred(), &used_pred) {
            continue;
        }
        debug!(
            "selected refr clique {} vs. pred clique {} ({})",
            i,
            j,
            pair.class()
        );
        mark_used(pair.refr(), &mut used_refr);
        mark_used(pair.pred(), &mut used_pred);
        pairs.push(pair);
    }

    let mut unique_refr = Vec::new();
    for clique in refr_cliques {
        if all_unused(clique, &used_refr) {
            mark_used(clique, &mut used_refr);
            unique_refr.push(clique.clone());
        }
    }
    let mut unique_pred = Vec::new();
    for clique in pred_cliques {
        if all_unused(clique, &used_pred) {
            mark_used(clique, &mut used_pred);
            unique_pred.push(clique.clone());
        }
    }

    Ok(LocusReport {
        pairs,
        unique_refr,
        unique_pred,
    })
}
