//! Annealing loop.
//!
//! # Algorithm
//!
//! 1. Estimate `T0` from the score spread of random masks
//! 2. Start from a mask with each bit set with probability 0.5
//! 3. Until the clock expires:
//!    a. Flip `k` random bits of the current mask (see [`Neighborhood`])
//!    b. Score the candidate and update the best unconditionally
//!    c. Metropolis: keep non-worse candidates, keep worse ones with
//!       probability `exp(Δ / T)`
//!    d. Cool `T` geometrically once per batch, floored at `min_temperature`
//! 4. Return the best score seen

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::{Neighborhood, SaConfig};
use super::temperature::estimate_initial_temperature;
use super::types::{Clock, SearchPhase, SearchState, WallClock};
use crate::error::Result;
use crate::mask::Mask;
use crate::objective::MaskScorer;
use crate::sequence::Sequence;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaResult {
    /// Best LIS length found.
    pub best_score: usize,

    /// A mask achieving `best_score`.
    pub best_mask: Mask,

    /// Completed iterations (candidate evaluations).
    pub iterations: usize,

    /// Temperature the search started from.
    pub initial_temperature: f64,

    /// Temperature when the clock expired.
    pub final_temperature: f64,

    /// Accepted moves, including improvements.
    pub accepted_moves: usize,

    /// Moves that strictly improved the current score.
    pub improving_moves: usize,

    /// Best score sampled every `history_interval` iterations.
    pub score_history: Vec<usize>,
}

impl SaResult {
    fn empty() -> Self {
        Self {
            best_score: 0,
            best_mask: Mask::empty(),
            iterations: 0,
            initial_temperature: 0.0,
            final_temperature: 0.0,
            accepted_moves: 0,
            improving_moves: 0,
            score_history: vec![0],
        }
    }
}

/// Runs the annealing search.
pub struct SaRunner;

impl SaRunner {
    /// Runs until `config.deadline` elapses.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_subrev::sa::{SaConfig, SaRunner};
    /// use u_subrev::Sequence;
    ///
    /// let seq = Sequence::new(vec![5, 4, 3, 2, 1]).unwrap();
    /// let config = SaConfig::default()
    ///     .with_deadline(Duration::from_millis(50))
    ///     .with_seed(42);
    /// let result = SaRunner::run(&seq, &config).unwrap();
    /// assert_eq!(result.best_score, 5);
    /// ```
    pub fn run(sequence: &Sequence, config: &SaConfig) -> Result<SaResult> {
        let clock = WallClock::starting_now(config.deadline);
        Self::run_with_clock(sequence, config, clock)
    }

    /// Runs until `clock` expires.
    pub fn run_with_clock<C: Clock>(
        sequence: &Sequence,
        config: &SaConfig,
        clock: C,
    ) -> Result<SaResult> {
        Self::run_with_observer(sequence, config, clock, |_| {})
    }

    /// Runs until `clock` expires, calling `observer` after every iteration.
    pub fn run_with_observer<C, F>(
        sequence: &Sequence,
        config: &SaConfig,
        mut clock: C,
        mut observer: F,
    ) -> Result<SaResult>
    where
        C: Clock,
        F: FnMut(&SearchState),
    {
        config.validate()?;

        let n = sequence.len();
        if n == 0 {
            debug!("empty sequence, skipping search");
            return Ok(SaResult::empty());
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scorer = MaskScorer::new(sequence.as_slice(), config.evaluator);

        let initial_temperature = match config.initial_temperature {
            Some(t) => t.max(config.min_temperature),
            None => estimate_initial_temperature(
                &mut scorer,
                config.initial_temperature_samples,
                config.spread,
                config.min_temperature,
                &mut rng,
            ),
        };

        let start = Mask::random(n, &mut rng);
        let start_score = scorer.score(start);
        let mut state = SearchState::new(
            start,
            start_score,
            scorer.identity_score(),
            initial_temperature,
        );
        debug!(
            n,
            seed,
            initial_temperature,
            start_score,
            best_score = state.best_score,
            "annealing started"
        );

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut score_history = vec![state.best_score];

        state.phase = SearchPhase::Exploring;
        while !clock.expired() {
            let flips = neighbor_flips(
                config.neighborhood,
                n,
                state.temperature,
                initial_temperature,
            );
            let mut candidate = state.mask;
            for _ in 0..flips {
                candidate.flip(rng.random_range(0..n));
            }
            let candidate_score = scorer.score(candidate);

            if state.observe(candidate, candidate_score) {
                trace!(
                    iteration = state.iteration,
                    best_score = candidate_score,
                    temperature = state.temperature,
                    "new best"
                );
            }

            // Metropolis acceptance criterion
            let accept = if candidate_score >= state.score {
                if candidate_score > state.score {
                    improving_moves += 1;
                }
                true
            } else {
                let delta = candidate_score as f64 - state.score as f64;
                let probability = (delta / state.temperature).exp();
                rng.random::<f64>() < probability
            };

            if accept {
                state.mask = candidate;
                state.score = candidate_score;
                accepted_moves += 1;
            }

            state.iteration += 1;
            if state.iteration.is_multiple_of(config.batch_size) {
                state.temperature =
                    (state.temperature * config.cooling_rate).max(config.min_temperature);
            }
            if state.iteration.is_multiple_of(config.history_interval) {
                score_history.push(state.best_score);
            }

            observer(&state);
        }
        state.phase = SearchPhase::Terminated;

        if score_history.last() != Some(&state.best_score) {
            score_history.push(state.best_score);
        }

        debug!(
            iterations = state.iteration,
            accepted_moves,
            improving_moves,
            final_temperature = state.temperature,
            best_score = state.best_score,
            "annealing finished"
        );

        Ok(SaResult {
            best_score: state.best_score,
            best_mask: state.best_mask,
            iterations: state.iteration,
            initial_temperature,
            final_temperature: state.temperature,
            accepted_moves,
            improving_moves,
            score_history,
        })
    }
}

/// Number of bit flips used to build the next candidate.
///
/// Scaled neighbourhoods shrink with the temperature ratio; once the ratio
/// rounds the count down to zero it is clamped to `min(5, n / 2)`, and
/// never below one.
fn neighbor_flips(
    neighborhood: Neighborhood,
    n: usize,
    temperature: f64,
    initial_temperature: f64,
) -> usize {
    match neighborhood {
        Neighborhood::SingleBit => 1,
        Neighborhood::Scaled => {
            let scaled = (n as f64 * temperature / initial_temperature).floor() as usize;
            let flips = if scaled == 0 { 5.min(n / 2) } else { scaled };
            flips.max(1)
        }
    }
}
