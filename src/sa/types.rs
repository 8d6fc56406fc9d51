//! Search state and the deadline capability.

use std::time::{Duration, Instant};

use crate::mask::Mask;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decides when the search must stop.
///
/// Polled once before every iteration. The search never checks it
/// mid-iteration.
pub trait Clock {
    /// Returns `true` once the budget is exhausted.
    fn expired(&mut self) -> bool;
}

/// Wall-clock deadline fixed at construction.
///
/// A budget too large to represent as an `Instant` never expires.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    deadline: Option<Instant>,
}

impl WallClock {
    /// Deadline `budget` from now.
    pub fn starting_now(budget: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(budget),
        }
    }

    pub fn until(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// `None` when the budget is unbounded.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Clock for WallClock {
    fn expired(&mut self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Deterministic clock that allows a fixed number of iterations.
///
/// The first `n` polls report time left, every later poll reports
/// expiry. `IterationBudget::new(0)` behaves like a deadline that has
/// already passed: the search initializes and stops without iterating.
#[derive(Debug, Clone, Copy)]
pub struct IterationBudget {
    remaining: usize,
}

impl IterationBudget {
    pub fn new(iterations: usize) -> Self {
        Self {
            remaining: iterations,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Clock for IterationBudget {
    fn expired(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn expired(&mut self) -> bool {
        (**self).expired()
    }
}

/// Lifecycle of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchPhase {
    Initializing,
    Exploring,
    Terminated,
}

/// Everything the annealing loop mutates.
///
/// Owned by the runner for the duration of one search. `best_score` never
/// decreases and is never below `score`; `best_mask` always reproduces
/// `best_score`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchState {
    pub phase: SearchPhase,
    /// Mask of the last accepted state.
    pub mask: Mask,
    /// Score of `mask`.
    pub score: usize,
    pub temperature: f64,
    /// Completed iterations.
    pub iteration: usize,
    pub best_score: usize,
    pub best_mask: Mask,
}

impl SearchState {
    /// Initial state for a start mask and the identity baseline.
    ///
    /// The identity mask is always a candidate, so the best starts as the
    /// better of the two.
    pub(crate) fn new(
        mask: Mask,
        score: usize,
        identity_score: usize,
        temperature: f64,
    ) -> Self {
        let (best_score, best_mask) = if identity_score > score {
            (identity_score, Mask::empty())
        } else {
            (score, mask)
        };
        Self {
            phase: SearchPhase::Initializing,
            mask,
            score,
            temperature,
            iteration: 0,
            best_score,
            best_mask,
        }
    }

    /// Records `score` for `mask` as the best if it beats the current best.
    #[inline]
    pub(crate) fn observe(&mut self, mask: Mask, score: usize) -> bool {
        if score > self.best_score {
            self.best_score = score;
            self.best_mask = mask;
            true
        } else {
            false
        }
    }
}
