use parseval_core::CliqueError;
use thiserror::Error;

use crate::config::CompareConfigError;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Invalid clique: {0}")]
    InvalidClique(#[from] CliqueError),

    #[error("Cannot build a pair from two empty cliques")]
    EmptyPair,

    #[error("Pair {refr} vs. {pred} could not be classified; it has not been scored")]
    Unclassified { refr: String, pred: String },

    #[error("Locus {locus} has {count} transcripts, more than the limit of {limit}")]
    LocusTooLarge {
        locus: String,
        count: usize,
        limit: usize,
    },

    #[error("Reference and prediction annotations have no sequence IDs in common")]
    NoSharedSequences,

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Config(#[from] CompareConfigError),
}

pub type CompareResult<T> = std::result::Result<T, CompareError>;
