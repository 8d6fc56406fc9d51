//! Exhaustive reference solver.
//!
//! Enumerates all `2ⁿ` masks. Exponential, so it is limited to short
//! sequences and exists only to check the annealer in tests and benches.

use crate::error::{Error, Result};
use crate::mask::Mask;
use crate::objective::{LisEvaluator, MaskScorer};
use crate::sequence::Sequence;

/// Longest sequence the oracle accepts.
pub const ORACLE_MAX_LEN: usize = 20;

/// Best achievable LIS over every possible subsequence reversal.
///
/// # Examples
///
/// ```
/// use u_subrev::{oracle::brute_force_solve, Sequence};
///
/// let seq = Sequence::new(vec![5, 4, 3, 2, 1]).unwrap();
/// assert_eq!(brute_force_solve(&seq).unwrap(), 5);
/// ```
pub fn brute_force_solve(sequence: &Sequence) -> Result<usize> {
    let n = sequence.len();
    if n > ORACLE_MAX_LEN {
        return Err(Error::OracleTooLarge {
            len: n,
            max: ORACLE_MAX_LEN,
        });
    }

    let mut scorer = MaskScorer::new(sequence.as_slice(), LisEvaluator::ValueIndexed);
    let best = (0..1u64 << n)
        .map(|bits| scorer.score(Mask::from_bits(bits)))
        .max()
        .unwrap_or(0);
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(values: &[u32]) -> usize {
        brute_force_solve(&Sequence::new(values.to_vec()).unwrap()).unwrap()
    }

    #[test]
    fn test_known_optima() {
        assert_eq!(solve(&[]), 0);
        assert_eq!(solve(&[7]), 1);
        assert_eq!(solve(&[1, 2, 3, 4, 5]), 5);
        assert_eq!(solve(&[5, 4, 3, 2, 1]), 5);
        assert_eq!(solve(&[3, 1, 4, 1, 5, 2]), 4);
        assert_eq!(solve(&[5, 7, 9, 2, 7, 10]), 5);
        assert_eq!(solve(&[9, 1, 8, 2, 7, 3, 6, 4, 5]), 6);
    }

    #[test]
    fn test_rejects_long_input() {
        let seq = Sequence::new(vec![1; ORACLE_MAX_LEN + 1]).unwrap();
        assert_eq!(
            brute_force_solve(&seq),
            Err(Error::OracleTooLarge {
                len: ORACLE_MAX_LEN + 1,
                max: ORACLE_MAX_LEN
            })
        );
    }
}
