pub mod clique;
pub mod locus;
pub mod range;
pub mod strand;
pub mod transcript;

// re-export for cleaner imports
pub use self::clique::TranscriptClique;
pub use self::locus::Locus;
pub use self::range::Range;
pub use self::strand::Strand;
pub use self::transcript::{Transcript, UtrKind, UtrSegment};
