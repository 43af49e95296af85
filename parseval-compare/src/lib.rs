//! Scoring, classification and aggregation of reference vs. prediction gene
//! models.
//!
//! For each locus, transcripts of both annotations are grouped into cliques
//! (see `parseval-cliques`), every overlapping reference/prediction clique
//! pair is scored base by base and unit by unit, and the best disjoint pairs
//! are kept:
//!
//! - [`models`]: per-base [`ModelVector`](models::ModelVector)s
//! - [`statistics`]: structural and nucleotide counts with [`Rate`](statistics::Rate)s
//! - [`scoring`]: [`CliquePair`](scoring::CliquePair), edit distance, splice complexity
//! - [`classify`]: the six [`ComparisonClass`](classify::ComparisonClass)es
//! - [`aggregate`]: pair selection for one locus
//! - [`comparison`]: totals that add up across loci and sequences
//! - [`engine`]: per-locus and parallel corpus drivers
//!
//! # Example
//!
//! ```rust
//! use parseval_compare::{CompareConfig, ComparisonClass, compare_locus};
//! use parseval_core::models::{Locus, Range, Strand, Transcript};
//!
//! let mrna = Transcript::new("EDEN.1", "ctg123", Range::new(1050, 9000), Strand::Forward)
//!     .with_exons([Range::new(1050, 1500), Range::new(3000, 3902), Range::new(5000, 9000)])
//!     .with_cds([Range::new(1201, 1500), Range::new(3000, 3902), Range::new(5000, 7600)]);
//! let locus = Locus::from_transcripts("ctg123", vec![mrna.clone()], vec![mrna]).unwrap();
//!
//! let report = compare_locus(&locus, &CompareConfig::default()).unwrap();
//! assert_eq!(report.pairs[0].class(), ComparisonClass::PerfectMatch);
//! ```

pub mod aggregate;
pub mod classify;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod scoring;
pub mod statistics;

// re-exports
pub use aggregate::{LocusReport, aggregate};
pub use classify::{ComparisonClass, classify};
pub use comparison::{ComparisonData, LocusSummary};
pub use config::CompareConfig;
pub use engine::{CorpusComparison, compare_loci, compare_locus, seq_intersection, seq_union};
pub use errors::CompareError;
pub use scoring::{CliquePair, edit_distance, splice_complexity};
pub use statistics::{ComparisonStats, Rate};
