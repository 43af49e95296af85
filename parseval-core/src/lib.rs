//! Core data model for comparing two gene-structure annotations.
//!
//! The types here are what the comparison engine consumes and shares:
//!
//! - [`Range`](models::Range) and [`Strand`](models::Strand): closed, 1-based coordinates
//! - [`Transcript`](models::Transcript): one gene model with exons and CDS segments
//! - [`Locus`](models::Locus): reference and prediction transcripts grouped upstream
//! - [`TranscriptClique`](models::TranscriptClique): pairwise non-overlapping transcripts,
//!   borrowed from a locus
//!
//! Parsing annotation files and grouping transcripts into loci happen elsewhere.
//!
//! # Example
//!
//! ```rust
//! use parseval_core::models::{Locus, Range, Strand, Transcript};
//!
//! let mrna = Transcript::new("EDEN.1", "ctg123", Range::new(1050, 9000), Strand::Forward)
//!     .with_exons([Range::new(1050, 1500), Range::new(3000, 3902), Range::new(5000, 9000)])
//!     .with_cds([Range::new(1201, 1500), Range::new(3000, 3902), Range::new(5000, 7600)]);
//! assert!(mrna.validate().is_ok());
//!
//! let locus = Locus::from_transcripts("ctg123", vec![mrna], vec![]).unwrap();
//! assert_eq!(locus.num_refr_transcripts(), 1);
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{CliqueError, TranscriptError};
