//! SA configuration.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::objective::LisEvaluator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a neighbour mask is derived from the current mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Neighborhood {
    /// Flips `k = floor(n × T / T0)` random bits (with repetition).
    ///
    /// When `k` collapses to zero it is clamped to `min(5, n / 2)`, and
    /// never below 1, so the walk keeps moving at low temperature.
    #[default]
    Scaled,

    /// Flips exactly one random bit per iteration.
    ///
    /// Explores only a tiny region around the start on long sequences;
    /// kept as a baseline.
    SingleBit,
}

/// Statistic used to turn sampled scores into an initial temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpreadMeasure {
    /// Population standard deviation.
    #[default]
    StdDev,
    /// Mean absolute deviation from the mean.
    MeanAbsDeviation,
}

/// Configuration for the annealing search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_subrev::sa::{Neighborhood, SaConfig};
///
/// let config = SaConfig::default()
///     .with_deadline(Duration::from_millis(500))
///     .with_cooling_rate(0.9995)
///     .with_batch_size(10)
///     .with_neighborhood(Neighborhood::Scaled)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Wall-clock budget for [`SaRunner::run`](super::SaRunner::run).
    ///
    /// Covers temperature estimation too. The deadline is polled once per
    /// iteration, so the run may overshoot by one evaluation.
    pub deadline: Duration,

    /// Random masks sampled to estimate the initial temperature.
    pub initial_temperature_samples: usize,

    /// Explicit initial temperature. Skips estimation when set.
    pub initial_temperature: Option<f64>,

    /// Multiplicative decay applied once per batch, in (0, 1].
    pub cooling_rate: f64,

    /// Iterations between two cooling steps.
    pub batch_size: usize,

    /// Floor for every temperature, including the estimate.
    pub min_temperature: f64,

    /// Neighbour generation strategy.
    pub neighborhood: Neighborhood,

    /// Spread statistic for temperature estimation.
    pub spread: SpreadMeasure,

    /// LIS formulation used to score candidates.
    pub evaluator: LisEvaluator,

    /// Iterations between two entries of the best-score history.
    pub history_interval: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            deadline: Duration::from_millis(1950),
            initial_temperature_samples: 1000,
            initial_temperature: None,
            cooling_rate: 0.9999,
            batch_size: 1,
            min_temperature: 1e-6,
            neighborhood: Neighborhood::default(),
            spread: SpreadMeasure::default(),
            evaluator: LisEvaluator::default(),
            history_interval: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_initial_temperature_samples(mut self, n: usize) -> Self {
        self.initial_temperature_samples = n;
        self
    }

    /// Fixes the initial temperature instead of estimating it.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = Some(t);
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn with_spread(mut self, spread: SpreadMeasure) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_evaluator(mut self, evaluator: LisEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_temperature.is_none() && self.initial_temperature_samples == 0 {
            return Err(Error::InvalidConfig(
                "initial_temperature_samples must be at least 1 when no initial_temperature is given"
                    .into(),
            ));
        }
        if let Some(t) = self.initial_temperature {
            if !(t.is_finite() && t > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "initial_temperature must be positive and finite, got {t}"
                )));
            }
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig("batch_size must be at least 1".into()));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "min_temperature must be positive and finite, got {}",
                self.min_temperature
            )));
        }
        if self.history_interval == 0 {
            return Err(Error::InvalidConfig(
                "history_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
