//! Simulated Annealing over reversal masks.
//!
//! An anytime search: the best score seen so far is always available and
//! the loop stops as soon as its [`Clock`] expires. Worsening moves are
//! accepted with a probability that shrinks as the temperature cools,
//! which lets the walk escape local optima early and settle late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod temperature;
mod types;

pub use config::{Neighborhood, SaConfig, SpreadMeasure};
pub use runner::{SaResult, SaRunner};
pub use temperature::{estimate_initial_temperature, sample_score_stats, ScoreStats};
pub use types::{Clock, IterationBudget, SearchPhase, SearchState, WallClock};
