use std::ptr;

use crate::errors::CliqueError;
use crate::models::{Range, Transcript, UtrSegment};

///
/// An ordered group of pairwise non-overlapping transcripts from one
/// annotation source: one plausible set of gene models for a locus.
///
/// Transcripts are borrowed from the locus that owns them. The same
/// transcript can sit in several cliques; membership is decided by identity,
/// not by value.
///
#[derive(Debug, Clone, Default)]
pub struct TranscriptClique<'a> {
    transcripts: Vec<&'a Transcript>,
}

impl<'a> TranscriptClique<'a> {
    pub fn single(transcript: &'a Transcript) -> Self {
        Self {
            transcripts: vec![transcript],
        }
    }

    ///
    /// Build a clique, checking that no two members overlap.
    ///
    pub fn try_from_transcripts(transcripts: Vec<&'a Transcript>) -> Result<Self, CliqueError> {
        let clique = Self { transcripts };
        clique.validate()?;
        Ok(clique)
    }

    pub fn transcripts(&self) -> &[&'a Transcript] {
        &self.transcripts
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    pub fn contains(&self, transcript: &Transcript) -> bool {
        self.transcripts.iter().any(|t| ptr::eq(*t, transcript))
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.transcripts.iter().map(|t| t.id.as_str()).collect()
    }

    /// Range spanned by all members, `None` for an empty clique.
    pub fn range(&self) -> Option<Range> {
        self.transcripts
            .iter()
            .map(|t| t.range)
            .reduce(|acc, r| acc.union(&r))
    }

    pub fn validate(&self) -> Result<(), CliqueError> {
        for (i, a) in self.transcripts.iter().enumerate() {
            for b in &self.transcripts[i + 1..] {
                if ptr::eq(*a, *b) {
                    return Err(CliqueError::DuplicateTranscript(a.id.clone()));
                }
                if a.range.overlaps(&b.range) {
                    return Err(CliqueError::OverlappingTranscripts {
                        first: a.id.clone(),
                        second: b.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Exons of every member, sorted.
    pub fn exons(&self) -> Vec<Range> {
        let mut exons: Vec<Range> = self
            .transcripts
            .iter()
            .flat_map(|t| t.exons().iter().copied())
            .collect();
        exons.sort();
        exons
    }

    /// CDS segments of every member, sorted.
    pub fn cds_segments(&self) -> Vec<Range> {
        let mut cds: Vec<Range> = self
            .transcripts
            .iter()
            .flat_map(|t| t.cds_segments().iter().copied())
            .collect();
        cds.sort();
        cds
    }

    pub fn utr_segments(&self) -> Vec<UtrSegment> {
        let mut utrs: Vec<UtrSegment> = self
            .transcripts
            .iter()
            .flat_map(|t| t.utr_segments())
            .collect();
        utrs.sort_by_key(|u| u.range);
        utrs
    }

    pub fn num_exons(&self) -> usize {
        self.transcripts.iter().map(|t| t.exons().len()).sum()
    }

    pub fn cds_length(&self) -> u64 {
        self.transcripts.iter().map(|t| t.cds_length() as u64).sum()
    }
}

/// Collects members as given; call [`TranscriptClique::validate`] when the
/// source does not already guarantee they are disjoint.
impl<'a> FromIterator<&'a Transcript> for TranscriptClique<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Transcript>>(iter: I) -> Self {
        Self {
            transcripts: iter.into_iter().collect(),
        }
    }
}

impl PartialEq for TranscriptClique<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.transcripts.len() == other.transcripts.len()
            && self
                .transcripts
                .iter()
                .zip(other.transcripts.iter())
                .all(|(a, b)| ptr::eq(*a, *b))
    }
}

impl Eq for TranscriptClique<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strand;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn transcript(id: &str, start: u32, end: u32) -> Transcript {
        Transcript::new(id, "chr1", Range::new(start, end), Strand::Forward)
            .with_exons([Range::new(start, end)])
    }

    #[fixture]
    fn transcripts() -> Vec<Transcript> {
        vec![
            transcript("a", 100, 200),
            transcript("b", 300, 400),
            transcript("c", 150, 350),
        ]
    }

    #[rstest]
    fn test_range_and_ids(transcripts: Vec<Transcript>) {
        let clique =
            TranscriptClique::try_from_transcripts(vec![&transcripts[0], &transcripts[1]]).unwrap();
        assert_eq!(clique.range(), Some(Range::new(100, 400)));
        assert_eq!(clique.ids(), vec!["a", "b"]);
        assert_eq!(clique.num_exons(), 2);
    }

    #[rstest]
    fn test_overlapping_members_rejected(transcripts: Vec<Transcript>) {
        let result = TranscriptClique::try_from_transcripts(vec![&transcripts[0], &transcripts[2]]);
        assert_eq!(
            result,
            Err(CliqueError::OverlappingTranscripts {
                first: "a".to_string(),
                second: "c".to_string()
            })
        );
    }

    #[rstest]
    fn test_membership_is_by_identity(transcripts: Vec<Transcript>) {
        let clique = TranscriptClique::single(&transcripts[0]);
        let twin = transcripts[0].clone();
        assert_eq!(clique.contains(&transcripts[0]), true);
        assert_eq!(clique.contains(&twin), false);
    }

    #[rstest]
    fn test_empty_clique_has_no_range() {
        let clique = TranscriptClique::default();
        assert_eq!(clique.range(), None);
        assert_eq!(clique.is_empty(), true);
    }
}
