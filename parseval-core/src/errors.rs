use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("Transcript {0} has no exons")]
    NoExons(String),

    #[error("Invalid range for transcript {id}: start={start}, end={end}")]
    InvalidRange { id: String, start: u32, end: u32 },

    #[error("Exon {exon} of transcript {id} lies outside the transcript range {range}")]
    ExonOutsideTranscript {
        id: String,
        exon: String,
        range: String,
    },

    #[error("Exons {first} and {second} of transcript {id} overlap")]
    OverlappingExons {
        id: String,
        first: String,
        second: String,
    },

    #[error("CDS segment {cds} of transcript {id} is not contained in any exon")]
    CdsOutsideExons { id: String, cds: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliqueError {
    #[error("Transcripts {first} and {second} overlap and cannot share a clique")]
    OverlappingTranscripts { first: String, second: String },

    #[error("Transcript {0} appears more than once in a clique")]
    DuplicateTranscript(String),
}
