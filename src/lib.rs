//! Anytime optimizer for the subsequence-reversal LIS problem.
//!
//! Given a short sequence of small non-negative integers, choose a set of
//! positions and reverse the order of the values occupying them so that
//! the longest non-decreasing subsequence (LIS) of the result is as long
//! as possible.
//!
//! - [`objective`]: LIS evaluation over the bounded value domain.
//! - [`mask`]: reversal masks and the (self-inverse) transform.
//! - [`sa`]: time-bounded Simulated Annealing over masks.
//! - [`oracle`]: exhaustive reference solver for short inputs.
//!
//! # Examples
//!
//! ```
//! use u_subrev::sa::{IterationBudget, SaConfig, SaRunner};
//! use u_subrev::Sequence;
//!
//! let seq = Sequence::new(vec![3, 1, 4, 1, 5, 2]).unwrap();
//! let config = SaConfig::default().with_seed(7);
//! let result = SaRunner::run_with_clock(&seq, &config, IterationBudget::new(20_000)).unwrap();
//! assert_eq!(result.best_score, 4);
//! ```

pub mod error;
pub mod mask;
pub mod objective;
pub mod oracle;
pub mod sa;
pub mod sequence;

pub use error::{Error, Result};
pub use mask::Mask;
pub use sequence::Sequence;
