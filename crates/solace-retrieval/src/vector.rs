//! Nearest-neighbour selection by cosine similarity.
//!
//! One linear pass, strict `>` against the running best: the earliest
//! candidate reaching the maximum wins. Candidates whose dimensionality
//! differs from the query are skipped, never fatal.

use tracing::{debug, warn};

use crate::errors::{MatchError, MatchMode, Result};
use crate::similarity::cosine_similarity;

/// The winning candidate and its score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorMatch<T> {
    /// The winning candidate.
    pub item: T,
    /// `cosine_similarity(query, winner)`.
    pub score: f64,
}

/// Select the candidate most similar to `query`.
///
/// Errors:
/// - [`MatchError::DimensionMismatch`] when every candidate had the wrong
///   dimensionality
/// - [`MatchError::EmptyCorpus`] when `candidates` is empty or no candidate
///   produced a usable score
pub fn find_best<'v, T, I>(query: &[f32], candidates: I) -> Result<VectorMatch<T>>
where
    I: IntoIterator<Item = (T, &'v [f32])>,
{
    let mut best: Option<VectorMatch<T>> = None;
    let mut seen = 0usize;
    let mut skipped = 0usize;

    for (item, embedding) in candidates {
        seen += 1;
        let Some(score) = cosine_similarity(query, embedding) else {
            skipped += 1;
            continue;
        };
        if score.is_nan() {
            debug!(candidate = seen - 1, "non-finite similarity, candidate ignored");
            continue;
        }
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(VectorMatch { item, score });
        }
    }

    if skipped > 0 {
        warn!(
            expected = query.len(),
            skipped, seen, "skipped candidates with mismatched dimensions"
        );
    }

    match best {
        Some(m) => {
            debug!(score = m.score, seen, "vector match selected");
            Ok(m)
        }
        None if seen > 0 && skipped == seen => Err(MatchError::DimensionMismatch {
            expected: query.len(),
            skipped,
        }),
        None => Err(MatchError::EmptyCorpus {
            mode: MatchMode::Vector,
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use solace_core::logging::capture_logs;
    use tracing::Level;

    fn run(query: &[f32], candidates: &[(usize, Vec<f32>)]) -> Result<VectorMatch<usize>> {
        find_best(query, candidates.iter().map(|(id, v)| (*id, v.as_slice())))
    }

    #[test]
    fn empty_candidate_set_is_no_match() {
        assert_matches!(
            run(&[1.0, 0.0], &[]),
            Err(MatchError::EmptyCorpus { .. })
        );
    }

    #[test]
    fn picks_most_similar() {
        let candidates = vec![
            (0, vec![0.0, 1.0]),
            (1, vec![0.9, 0.1]),
            (2, vec![-1.0, 0.0]),
        ];
        let m = run(&[1.0, 0.0], &candidates).unwrap();
        assert_eq!(m.item, 1);
    }

    #[test]
    fn ties_keep_first_seen() {
        let candidates = vec![
            (0, vec![0.0, 1.0]),
            (1, vec![2.0, 0.0]),
            (2, vec![2.0, 0.0]),
        ];
        for _ in 0..10 {
            assert_eq!(run(&[1.0, 0.0], &candidates).unwrap().item, 1);
        }
    }

    #[test]
    fn mismatched_dimension_never_wins() {
        let candidates = vec![
            (0, vec![1.0, 0.0, 0.0]),
            (1, vec![0.1, 0.9]),
        ];
        let m = run(&[1.0, 0.0], &candidates).unwrap();
        assert_eq!(m.item, 1);
    }

    #[test]
    fn all_mismatched_reports_dimension_mismatch() {
        let candidates = vec![(0, vec![1.0]), (1, vec![1.0, 0.0, 0.0])];
        assert_matches!(
            run(&[1.0, 0.0], &candidates),
            Err(MatchError::DimensionMismatch { expected: 2, skipped: 2 })
        );
    }

    #[test]
    fn exactly_opposite_single_candidate_still_matches() {
        let m = run(&[1.0, 0.0], &[(7, vec![-1.0, 0.0])]).unwrap();
        assert_eq!(m.item, 7);
        assert!((m.score + 1.0).abs() < 1e-6);
    }

    #[test]
    fn published_score_is_reproducible() {
        let query = [0.3, -0.2, 0.9];
        let candidates = vec![(0, vec![0.1, 0.4, 0.5]), (1, vec![0.3, -0.1, 1.0])];
        let m = run(&query, &candidates).unwrap();
        let expected = cosine_similarity(&query, &candidates[m.item].1).unwrap();
        assert_eq!(m.score.to_bits(), expected.to_bits());
    }

    #[test]
    fn nan_candidate_is_ignored() {
        let candidates = vec![(0, vec![f32::NAN, 0.0]), (1, vec![0.0, 1.0])];
        assert_eq!(run(&[1.0, 0.0], &candidates).unwrap().item, 1);
    }

    #[test]
    fn only_nan_candidates_is_empty_corpus() {
        let candidates = vec![(0, vec![f32::NAN, 0.0])];
        assert_matches!(
            run(&[1.0, 0.0], &candidates),
            Err(MatchError::EmptyCorpus {
                mode: MatchMode::Vector
            })
        );
    }

    #[test]
    fn nan_and_mismatched_candidates_is_empty_corpus() {
        let candidates = vec![(0, vec![f32::NAN, 0.0]), (1, vec![1.0])];
        assert_matches!(
            run(&[1.0, 0.0], &candidates),
            Err(MatchError::EmptyCorpus { .. })
        );
    }

    #[test]
    fn mismatch_is_logged_as_warning() {
        let (logs, _guard) = capture_logs();
        let candidates = vec![(0, vec![1.0]), (1, vec![1.0, 0.0])];
        let _ = run(&[1.0, 0.0], &candidates).unwrap();
        assert!(logs.has_event(Level::WARN, "mismatched dimensions"));
        let event = logs
            .events()
            .into_iter()
            .find(|e| e.level == Level::WARN)
            .unwrap();
        assert_eq!(event.field("skipped"), Some("1"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn winner_has_maximal_score(
                query in proptest::collection::vec(-10.0f32..10.0, 4),
                pool in proptest::collection::vec(
                    proptest::collection::vec(-10.0f32..10.0, 4),
                    1..20,
                ),
            ) {
                let candidates: Vec<(usize, Vec<f32>)> = pool.into_iter().enumerate().collect();
                let m = run(&query, &candidates).unwrap();
                for (_, v) in &candidates {
                    prop_assert!(cosine_similarity(&query, v).unwrap() <= m.score);
                }
            }
        }
    }
}
