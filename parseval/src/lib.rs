//! Compare a predicted gene-structure annotation against a reference.
//!
//! This crate re-exports the parseval workspace behind cargo features:
//!
//! - `core`: transcripts, loci and cliques ([`core`])
//! - `cliques`: compatibility graphs and Bron–Kerbosch enumeration ([`cliques`])
//! - `compare`: scoring, classification, aggregation and corpus totals ([`compare`])
//!
//! All three are enabled by default.

#[cfg(feature = "core")]
#[doc(inline)]
pub use parseval_core as core;

#[cfg(feature = "cliques")]
#[doc(inline)]
pub use parseval_cliques as cliques;

#[cfg(feature = "compare")]
#[doc(inline)]
pub use parseval_compare as compare;
