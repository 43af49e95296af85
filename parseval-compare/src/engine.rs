//! Locus-level driver: clique enumeration, aggregation and corpus totals.

use std::collections::BTreeSet;

use fxhash::FxHashMap as HashMap;
use log::{debug, error, info, warn};
use rayon::prelude::*;

use parseval_cliques::CliqueEnumerator;
use parseval_core::models::Locus;

use crate::aggregate::{LocusReport, aggregate};
use crate::comparison::{ComparisonData, LocusSummary};
use crate::config::CompareConfig;
use crate::errors::{CompareError, CompareResult};

///
/// Compare the reference and prediction transcripts of one locus.
///
/// Fails with [`CompareError::LocusTooLarge`] before any enumeration when the
/// locus exceeds `config.max_transcripts_per_locus`.
///
pub fn compare_locus<'a>(locus: &'a Locus, config: &CompareConfig) -> CompareResult<LocusReport<'a>> {
    let count = locus.num_refr_transcripts() + locus.num_pred_transcripts();
    if let Some(limit) = config.max_transcripts_per_locus {
        if count > limit {
            return Err(CompareError::LocusTooLarge {
                locus: locus.to_string(),
                count,
                limit,
            });
        }
    }

    let enumerator = CliqueEnumerator::new(config.overlap_graph);
    let refr_cliques = enumerator.enumerate(locus.refr_transcripts());
    let pred_cliques = enumerator.enumerate(locus.pred_transcripts());
    debug!(
        "{}: {} reference and {} prediction cliques",
        locus,
        refr_cliques.len(),
        pred_cliques.len()
    );

    aggregate(&refr_cliques, &pred_cliques)
}

/// Results of [`compare_loci`].
#[derive(Debug, Clone, Default)]
pub struct CorpusComparison {
    pub total: ComparisonData,
    pub by_sequence: HashMap<String, ComparisonData>,
    /// One row per compared locus, in input order.
    pub loci: Vec<LocusSummary>,
    /// Loci that failed and were left out of every total.
    pub skipped: usize,
}

impl CorpusComparison {
    /// Sequence IDs with totals, sorted.
    pub fn seqids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_sequence.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

///
/// Compare every locus and accumulate totals per sequence and overall.
///
/// Loci are processed in parallel, on a dedicated pool of `config.threads`
/// workers when set. A locus that fails is logged and skipped as a whole;
/// it contributes nothing to any total.
///
pub fn compare_loci(loci: &[Locus], config: &CompareConfig) -> CompareResult<CorpusComparison> {
    let run = || -> Vec<Option<(LocusSummary, ComparisonData)>> {
        loci.par_iter()
            .map(|locus| match compare_locus(locus, config) {
                Ok(report) => Some((
                    LocusSummary::from_report(locus, &report),
                    ComparisonData::from_report(locus, &report),
                )),
                Err(e) => {
                    error!("Skipping locus {}: {}", locus, e);
                    None
                }
            })
            .collect()
    };

    let results = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(run),
        None => run(),
    };

    let mut corpus = CorpusComparison::default();
    for result in results {
        let Some((summary, data)) = result else {
            corpus.skipped += 1;
            continue;
        };
        corpus.total += data;
        *corpus
            .by_sequence
            .entry(summary.seqid.clone())
            .or_default() += data;
        corpus.loci.push(summary);
    }

    info!(
        "Compared {} loci on {} sequences ({} skipped)",
        corpus.loci.len(),
        corpus.by_sequence.len(),
        corpus.skipped
    );
    Ok(corpus)
}

///
/// Sequence IDs annotated on both sides, sorted. IDs found on one side only
/// are reported with a warning.
///
pub fn seq_intersection<S: AsRef<str>>(refr: &[S], pred: &[S]) -> CompareResult<Vec<String>> {
    let refr: BTreeSet<&str> = refr.iter().map(AsRef::as_ref).collect();
    let pred: BTreeSet<&str> = pred.iter().map(AsRef::as_ref).collect();

    for id in refr.difference(&pred) {
        warn!("Sequence {} has reference annotations but no predictions", id);
    }
    for id in pred.difference(&refr) {
        warn!("Sequence {} has predictions but no reference annotations", id);
    }

    let shared: Vec<String> = refr.intersection(&pred).map(|id| id.to_string()).collect();
    if shared.is_empty() {
        return Err(CompareError::NoSharedSequences);
    }
    Ok(shared)
}

/// Sequence IDs annotated on either side, sorted and deduplicated.
pub fn seq_union<S: AsRef<str>>(refr: &[S], pred: &[S]) -> Vec<String> {
    let all: BTreeSet<&str> = refr
        .iter()
        .chain(pred.iter())
        .map(AsRef::as_ref)
        .collect();
    all.into_iter().map(String::from).collect()
}
