use log::debug;

use parseval_core::models::{Transcript, TranscriptClique};

use crate::{OverlapGraph, OverlapGraphType, Ranged};

///
/// Enumerates candidate gene-model groupings for the transcripts of one
/// annotation source at one locus.
///
/// Every transcript is reported on its own first, even when it belongs to a
/// larger compatible group, so single-transcript candidates are always
/// available for pairing. Bron–Kerbosch then adds every maximal clique with
/// more than one member.
///
/// There is no limit on locus size: the search is exponential in the worst
/// case and callers are expected to bound the number of transcripts.
///
/// # Examples
///
/// ```
/// use parseval_cliques::CliqueEnumerator;
/// use parseval_core::models::{Range, Strand, Transcript};
///
/// let mk = |id: &str, s: u32, e: u32| {
///     Transcript::new(id, "chr1", Range::new(s, e), Strand::Forward).with_exons([Range::new(s, e)])
/// };
/// let transcripts = vec![mk("a", 100, 900), mk("b", 100, 300), mk("c", 500, 900)];
///
/// let cliques = CliqueEnumerator::default().enumerate(&transcripts);
/// let ids: Vec<Vec<&str>> = cliques.iter().map(|c| c.ids()).collect();
/// assert_eq!(ids, vec![vec!["a"], vec!["b"], vec!["c"], vec!["b", "c"]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CliqueEnumerator {
    graph_type: OverlapGraphType,
}

impl CliqueEnumerator {
    pub fn new(graph_type: OverlapGraphType) -> Self {
        Self { graph_type }
    }

    pub fn enumerate<'a>(&self, transcripts: &'a [Transcript]) -> Vec<TranscriptClique<'a>> {
        if transcripts.len() <= 1 {
            return transcripts.iter().map(TranscriptClique::single).collect();
        }

        let mut cliques: Vec<TranscriptClique<'a>> =
            transcripts.iter().map(TranscriptClique::single).collect();

        let graph = OverlapGraph::new(transcripts, self.graph_type);
        for members in maximal_cliques(&graph, true) {
            cliques.push(members.into_iter().map(|i| &transcripts[i]).collect());
        }

        debug!(
            "{} transcripts -> {} cliques ({} multi-transcript)",
            transcripts.len(),
            cliques.len(),
            cliques.len() - transcripts.len()
        );
        cliques
    }
}

///
/// Shorthand for [`CliqueEnumerator::enumerate`] with an implicit graph.
///
pub fn enumerate_cliques(transcripts: &[Transcript]) -> Vec<TranscriptClique<'_>> {
    CliqueEnumerator::default().enumerate(transcripts)
}

///
/// All maximal cliques of the compatibility graph, as sorted vertex index
/// lists in discovery order. With `skip_trivial` set, single-vertex cliques
/// are left out.
///
pub fn maximal_cliques<T: Ranged>(graph: &OverlapGraph<'_, T>, skip_trivial: bool) -> Vec<Vec<usize>> {
    let mut cliques = Vec::new();
    if graph.is_empty() {
        return cliques;
    }

    let mut r = Vec::new();
    let p: Vec<usize> = (0..graph.len()).collect();
    bron_kerbosch(graph, &mut r, p, Vec::new(), skip_trivial, &mut cliques);
    cliques
}

// Pivotless Bron–Kerbosch. R grows in candidate order, so every reported
// clique is already sorted by input index.
fn bron_kerbosch<T: Ranged>(
    graph: &OverlapGraph<'_, T>,
    r: &mut Vec<usize>,
    mut p: Vec<usize>,
    mut x: Vec<usize>,
    skip_trivial: bool,
    cliques: &mut Vec<Vec<usize>>,
) {
    if p.is_empty() && x.is_empty() {
        if !skip_trivial || r.len() != 1 {
            cliques.push(r.clone());
        }
        return;
    }

    while !p.is_empty() {
        let v = p.remove(0);
        let new_p = graph.neighbors(v, &p);
        let new_x = graph.neighbors(v, &x);

        r.push(v);
        bron_kerbosch(graph, r, new_p, new_x, skip_trivial, cliques);
        r.pop();

        x.push(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parseval_core::models::{Range, Strand};

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::{fixture, rstest};

    fn transcript(id: &str, start: u32, end: u32) -> Transcript {
        Transcript::new(id, "ctg123", Range::new(start, end), Strand::Forward)
            .with_exons([Range::new(start, end)])
    }

    fn ids<'a>(cliques: &[TranscriptClique<'a>]) -> Vec<Vec<&'a str>> {
        cliques.iter().map(|c| c.ids()).collect()
    }

    fn random_transcripts(seed: u64, n: usize) -> Vec<Transcript> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|i| {
                let start = rng.gen_range(1..5000u32);
                let len = rng.gen_range(50..1500u32);
                transcript(&format!("t{i}"), start, start + len)
            })
            .collect()
    }

    // EDEN: three isoforms of one gene, all spanning the same region
    #[fixture]
    fn eden_isoforms() -> Vec<Transcript> {
        vec![
            transcript("EDEN.1", 1050, 9000),
            transcript("EDEN.2", 1050, 9000),
            transcript("EDEN.3", 1300, 9000),
        ]
    }

    #[rstest]
    fn test_single_transcript_is_one_clique() {
        let transcripts = vec![transcript("only", 10, 20)];
        let cliques = enumerate_cliques(&transcripts);
        assert_eq!(ids(&cliques), vec![vec!["only"]]);
    }

    #[rstest]
    fn test_no_transcripts_no_cliques() {
        let transcripts: Vec<Transcript> = vec![];
        assert_eq!(enumerate_cliques(&transcripts).len(), 0);
    }

    #[rstest]
    fn test_mutually_overlapping_isoforms(eden_isoforms: Vec<Transcript>) {
        let cliques = enumerate_cliques(&eden_isoforms);
        assert_eq!(
            ids(&cliques),
            vec![vec!["EDEN.1"], vec!["EDEN.2"], vec!["EDEN.3"]]
        );
    }

    #[rstest]
    fn test_isoforms_with_disjoint_pair() {
        let transcripts = vec![
            transcript("gene.1", 1000, 9000),
            transcript("gene.2", 1000, 4000),
            transcript("gene.3", 5000, 9000),
        ];
        let cliques = enumerate_cliques(&transcripts);
        assert_eq!(
            ids(&cliques),
            vec![
                vec!["gene.1"],
                vec!["gene.2"],
                vec!["gene.3"],
                vec!["gene.2", "gene.3"]
            ]
        );
    }

    #[rstest]
    fn test_maximal_cliques_without_skipping() {
        let ranges = vec![
            Range::new(1, 5),
            Range::new(3, 7),
            Range::new(6, 10),
            Range::new(20, 30),
        ];
        let graph = OverlapGraph::new(&ranges, OverlapGraphType::Implicit);
        assert_eq!(
            maximal_cliques(&graph, false),
            vec![vec![0, 2, 3], vec![1, 3]]
        );
    }

    #[rstest]
    fn test_isolated_vertex_is_trivial() {
        let ranges = vec![Range::new(1, 100), Range::new(10, 20), Range::new(30, 40)];
        let graph = OverlapGraph::new(&ranges, OverlapGraphType::Implicit);
        assert_eq!(maximal_cliques(&graph, false), vec![vec![0], vec![1, 2]]);
        assert_eq!(maximal_cliques(&graph, true), vec![vec![1, 2]]);
    }

    #[rstest]
    #[case(7, 8)]
    #[case(42, 12)]
    #[case(2024, 16)]
    fn test_clique_properties(#[case] seed: u64, #[case] n: usize) {
        let transcripts = random_transcripts(seed, n);
        let cliques = enumerate_cliques(&transcripts);

        // coverage: each transcript is reported on its own, in input order
        for (i, t) in transcripts.iter().enumerate() {
            assert_eq!(cliques[i].ids(), vec![t.id.as_str()]);
        }

        for clique in &cliques {
            // compatibility
            assert_eq!(clique.validate(), Ok(()));

            // maximality of everything found by the search
            if clique.len() > 1 {
                for t in &transcripts {
                    if clique.contains(t) {
                        continue;
                    }
                    let fits = clique
                        .transcripts()
                        .iter()
                        .all(|m| !m.range.overlaps(&t.range));
                    assert_eq!(fits, false, "{} extends clique {:?}", t.id, clique.ids());
                }
            }
        }
    }

    #[rstest]
    #[case(11, 14)]
    #[case(99, 10)]
    fn test_enumeration_is_deterministic(#[case] seed: u64, #[case] n: usize) {
        let transcripts = random_transcripts(seed, n);
        let implicit = CliqueEnumerator::new(OverlapGraphType::Implicit).enumerate(&transcripts);
        let again = CliqueEnumerator::new(OverlapGraphType::Implicit).enumerate(&transcripts);
        let matrix = CliqueEnumerator::new(OverlapGraphType::Matrix).enumerate(&transcripts);
        assert_eq!(ids(&implicit), ids(&again));
        assert_eq!(ids(&implicit), ids(&matrix));
    }
}
