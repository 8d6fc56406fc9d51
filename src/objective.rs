//! Objective evaluation: longest non-decreasing subsequence (LIS).
//!
//! Two formulations are provided. [`compute_lis`] indexes its table by
//! value and runs in `O(n × V)` where `V` is the largest value present;
//! it is the fast path for the bounded domain. [`compute_lis_quadratic`]
//! indexes by position and runs in `O(n²)` regardless of magnitude.
//! Both are pure and deterministic and always agree.

use crate::mask::{reverse_in_place, Mask};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects which LIS formulation the search uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LisEvaluator {
    /// Table indexed by value, `O(n × V)`.
    #[default]
    ValueIndexed,
    /// Table indexed by position, `O(n²)`.
    Quadratic,
}

impl LisEvaluator {
    /// Evaluates `values` with the selected formulation.
    #[inline]
    pub fn evaluate(self, values: &[u32]) -> usize {
        match self {
            LisEvaluator::ValueIndexed => compute_lis(values),
            LisEvaluator::Quadratic => compute_lis_quadratic(values),
        }
    }
}

/// Length of the longest non-decreasing subsequence of `values`.
///
/// `best[v]` holds the longest non-decreasing subsequence seen so far that
/// ends exactly in value `v`. For each element `x`, the new length ending
/// in `x` is `1 + max(best[0..=x])`.
///
/// # Examples
///
/// ```
/// use u_subrev::objective::compute_lis;
///
/// assert_eq!(compute_lis(&[]), 0);
/// assert_eq!(compute_lis(&[3, 1, 4, 1, 5]), 3);
/// assert_eq!(compute_lis(&[2, 2, 2]), 3);
/// ```
pub fn compute_lis(values: &[u32]) -> usize {
    let Some(&max_value) = values.iter().max() else {
        return 0;
    };

    let mut best = vec![0usize; max_value as usize + 1];
    let mut answer = 0;
    for &x in values {
        let x = x as usize;
        let ending_here = 1 + best[..=x].iter().copied().max().unwrap_or(0);
        if ending_here > best[x] {
            best[x] = ending_here;
        }
        answer = answer.max(ending_here);
    }
    answer
}

/// Position-indexed LIS: `len[i] = 1 + max(len[j])` over `j < i` with
/// `values[j] <= values[i]`.
pub fn compute_lis_quadratic(values: &[u32]) -> usize {
    let mut len = vec![1usize; values.len()];
    let mut answer = 0;
    for i in 0..values.len() {
        for j in 0..i {
            if values[j] <= values[i] && len[j] + 1 > len[i] {
                len[i] = len[j] + 1;
            }
        }
        answer = answer.max(len[i]);
    }
    answer
}

/// Scores masks against a fixed sequence through one reusable buffer.
///
/// Each evaluation reverses the masked subsequence in place, scores it,
/// then reverses it back, so no allocation happens per candidate.
#[derive(Debug, Clone)]
pub struct MaskScorer {
    scratch: Vec<u32>,
    evaluator: LisEvaluator,
}

impl MaskScorer {
    pub fn new(values: &[u32], evaluator: LisEvaluator) -> Self {
        Self {
            scratch: values.to_vec(),
            evaluator,
        }
    }

    /// Score of the unmodified sequence.
    pub fn identity_score(&self) -> usize {
        self.evaluator.evaluate(&self.scratch)
    }

    /// Score of the sequence with `mask` applied.
    pub fn score(&mut self, mask: Mask) -> usize {
        reverse_in_place(&mut self.scratch, mask);
        let score = self.evaluator.evaluate(&self.scratch);
        reverse_in_place(&mut self.scratch, mask);
        score
    }

    pub fn len(&self) -> usize {
        self.scratch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scratch.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::apply_mask;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        assert_eq!(compute_lis(&[]), 0);
        assert_eq!(compute_lis_quadratic(&[]), 0);
    }

    #[test]
    fn test_strictly_ascending() {
        let values: Vec<u32> = (0..20).collect();
        assert_eq!(compute_lis(&values), 20);
    }

    #[test]
    fn test_strictly_descending() {
        let values: Vec<u32> = (0..20).rev().collect();
        assert_eq!(compute_lis(&values), 1);
        assert_eq!(compute_lis_quadratic(&values), 1);
    }

    #[test]
    fn test_ties_count() {
        assert_eq!(compute_lis(&[5, 5, 1, 5, 2, 5]), 4);
        assert_eq!(compute_lis(&[0, 0, 0]), 3);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(compute_lis(&[3, 1, 4, 1, 5, 2]), 3);
        assert_eq!(compute_lis(&[5, 7, 9, 2, 7, 10]), 4);
        assert_eq!(compute_lis(&[9, 1, 8, 2, 7, 3, 6, 4, 5]), 5);
    }

    #[test]
    fn test_evaluator_dispatch() {
        let values = [4, 2, 3, 1, 5];
        assert_eq!(LisEvaluator::ValueIndexed.evaluate(&values), 3);
        assert_eq!(LisEvaluator::Quadratic.evaluate(&values), 3);
        assert_eq!(LisEvaluator::default(), LisEvaluator::ValueIndexed);
    }

    #[test]
    fn test_scorer_restores_buffer() {
        let values = vec![5, 4, 3, 2, 1];
        let mut scorer = MaskScorer::new(&values, LisEvaluator::ValueIndexed);
        assert_eq!(scorer.identity_score(), 1);
        assert_eq!(scorer.score(Mask::full(5)), 5);
        assert_eq!(scorer.identity_score(), 1);
        assert_eq!(scorer.len(), 5);
    }

    proptest! {
        #[test]
        fn prop_scorer_matches_apply_mask(
            values in prop::collection::vec(0u32..=50, 0..40),
            bits in any::<u64>(),
        ) {
            let mask = Mask::from_bits(bits);
            let mut scorer = MaskScorer::new(&values, LisEvaluator::Quadratic);
            prop_assert_eq!(scorer.score(mask), compute_lis(&apply_mask(&values, mask)));
            prop_assert_eq!(scorer.identity_score(), compute_lis(&values));
        }

        #[test]
        fn prop_formulations_agree(values in prop::collection::vec(0u32..=50, 0..40)) {
            prop_assert_eq!(compute_lis(&values), compute_lis_quadratic(&values));
        }

        #[test]
        fn prop_bounded_by_length(values in prop::collection::vec(0u32..=50, 0..40)) {
            let lis = compute_lis(&values);
            prop_assert!(lis <= values.len());
            prop_assert_eq!(lis == 0, values.is_empty());
        }
    }
}
