//! Initial temperature estimation.
//!
//! The spread of scores over uniformly random masks tells how large a
//! typical score difference is. Using it as `T0` makes an average-sized
//! worsening move start out with acceptance probability around `1/e`.

use rand::Rng;
use tracing::debug;

use super::config::SpreadMeasure;
use crate::mask::Mask;
use crate::objective::MaskScorer;

/// Summary statistics of sampled scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    pub samples: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub mean_abs_dev: f64,
}

impl ScoreStats {
    fn from_scores(scores: &[usize]) -> Self {
        if scores.is_empty() {
            return Self {
                samples: 0,
                mean: 0.0,
                std_dev: 0.0,
                mean_abs_dev: 0.0,
            };
        }
        let count = scores.len() as f64;
        let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / count;
        let variance = scores
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / count;
        let mean_abs_dev = scores.iter().map(|&s| (s as f64 - mean).abs()).sum::<f64>() / count;
        Self {
            samples: scores.len(),
            mean,
            std_dev: variance.sqrt(),
            mean_abs_dev,
        }
    }

    /// Selected spread, falling back to the mean absolute deviation when
    /// the standard deviation is zero.
    pub fn spread(&self, measure: SpreadMeasure) -> f64 {
        match measure {
            SpreadMeasure::StdDev if self.std_dev > 0.0 => self.std_dev,
            _ => self.mean_abs_dev,
        }
    }
}

/// Scores `samples` masks drawn uniformly from the full mask space.
pub fn sample_score_stats<R: Rng>(
    scorer: &mut MaskScorer,
    samples: usize,
    rng: &mut R,
) -> ScoreStats {
    let n = scorer.len();
    let scores: Vec<usize> = (0..samples)
        .map(|_| scorer.score(Mask::uniform(n, rng)))
        .collect();
    ScoreStats::from_scores(&scores)
}

/// Estimates the initial temperature for `scorer`'s sequence.
///
/// Always returns a value `>= min_temperature`; a degenerate spread
/// (every sample scoring the same) is floored rather than reported.
pub fn estimate_initial_temperature<R: Rng>(
    scorer: &mut MaskScorer,
    samples: usize,
    measure: SpreadMeasure,
    min_temperature: f64,
    rng: &mut R,
) -> f64 {
    let stats = sample_score_stats(scorer, samples, rng);
    let spread = stats.spread(measure);
    if spread < min_temperature {
        debug!(
            spread,
            min_temperature, "degenerate score spread, flooring initial temperature"
        );
        return min_temperature;
    }
    spread
}
