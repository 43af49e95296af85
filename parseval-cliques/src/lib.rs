//! Transcript compatibility graphs and maximal clique enumeration.
//!
//! Two transcripts from the same annotation source are *compatible* when
//! their ranges do not overlap: they could be separate genes sitting side by
//! side in one locus. A group of mutually compatible transcripts is a
//! [`TranscriptClique`](parseval_core::models::TranscriptClique), one plausible
//! set of gene models for the locus.
//!
//! This crate builds the compatibility relation ([`OverlapGraph`]) and finds
//! every maximal clique in it with Bron–Kerbosch ([`CliqueEnumerator`]).
//! It is part of the parseval workspace; scoring and classification of the
//! cliques live in `parseval-compare`.
//!
//! ## Quick Start
//!
//! ```rust
//! use parseval_cliques::enumerate_cliques;
//! use parseval_core::models::{Range, Strand, Transcript};
//!
//! let transcripts = vec![
//!     Transcript::new("gene1.t1", "chr1", Range::new(1000, 8000), Strand::Forward),
//!     Transcript::new("gene2.t1", "chr1", Range::new(1000, 3000), Strand::Forward),
//!     Transcript::new("gene3.t1", "chr1", Range::new(5000, 8000), Strand::Reverse),
//! ];
//!
//! let cliques = enumerate_cliques(&transcripts);
//!
//! // three singletons, then the one compatible pair
//! assert_eq!(cliques.len(), 4);
//! assert_eq!(cliques[3].ids(), vec!["gene2.t1", "gene3.t1"]);
//! ```
//!
//! ## Graph strategies
//!
//! [`OverlapGraphType::Implicit`] checks ranges on demand and is the right
//! choice for almost every locus. [`OverlapGraphType::Matrix`] precomputes the
//! full relation and pays off only for unusually crowded loci. Both produce
//! the same cliques in the same order.

pub mod cliques;
pub mod overlap_graph;
pub mod traits;

// re-exports
pub use self::cliques::{CliqueEnumerator, enumerate_cliques, maximal_cliques};
pub use self::overlap_graph::{OverlapGraph, OverlapGraphType};
pub use self::traits::Ranged;
