//! Weighting local search execution loop.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::instance::Instance;

use super::config::WlsConfig;
use super::penalty;
use super::search;
use super::state::SolutionState;

/// Seed used when the configuration does not provide one.
const DEFAULT_SEED: u64 = 0;

/// Result of a weighting local search run.
///
/// An infeasible result is a normal outcome, not an error: when the time
/// budget expires before any feasible assignment is found, the incumbent
/// is still reported with `feasible` set to `false`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WlsResult {
    /// Agent assigned to each job in the incumbent solution.
    pub assignment: Vec<usize>,
    /// Objective value of the incumbent.
    pub objective: f64,
    /// Whether the incumbent respects every agent's capacity.
    pub feasible: bool,
    /// Outer iterations executed.
    pub iterations: usize,
    /// Outer iteration at which the incumbent last improved.
    pub best_iteration: usize,
    /// Wall-clock time consumed.
    pub elapsed: Duration,
    /// Incumbent objective after each outer iteration.
    pub cost_history: Vec<f64>,
}

/// Weighting local search runner.
pub struct WlsRunner;

impl WlsRunner {
    /// Executes the weighting local search on `instance` until the
    /// configured time budget expires.
    ///
    /// The budget is checked only between outer iterations, so the run
    /// may overshoot it by the duration of one full descent. Fixing the
    /// seed makes the search trajectory reproducible.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use gap_wls::instance::Instance;
    /// use gap_wls::wls::{WlsConfig, WlsRunner};
    ///
    /// let instance = Instance::new(
    ///     vec![vec![4, 2, 8], vec![5, 1, 3]],
    ///     vec![vec![3, 2, 4], vec![2, 1, 3]],
    ///     vec![5, 4],
    /// )
    /// .unwrap();
    /// let config = WlsConfig::default()
    ///     .with_time_limit(Duration::from_millis(50))
    ///     .with_seed(42);
    ///
    /// let result = WlsRunner::run(&instance, &config);
    /// assert!(result.feasible);
    /// ```
    pub fn run(instance: &Instance, config: &WlsConfig) -> WlsResult {
        config.validate().expect("invalid WlsConfig");

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED));

        let mut current = SolutionState::random(instance, &mut rng);
        let mut incumbent = current.clone();
        penalty::init_weights(instance, &mut current);

        let start = Instant::now();
        let mut last_display = start;
        let mut iterations = 0usize;
        let mut best_iteration = 0usize;
        let mut cost_history = Vec::new();

        while start.elapsed() < config.time_limit {
            let previous_best = incumbent.objective();

            search::descend(instance, config, &mut current, &mut incumbent);
            penalty::update_weights(instance, &mut current, incumbent.objective(), config);
            iterations += 1;

            let elapsed = start.elapsed();
            if incumbent.objective() < previous_best {
                best_iteration = iterations;
                tracing::info!(
                    "{} current {} ({}) incumbent *{} mean_weight {:.3} {:.2}s",
                    iterations,
                    current.objective(),
                    current.objective() + current.weighted_penalty(),
                    incumbent.objective(),
                    current.mean_weight(),
                    elapsed.as_secs_f64()
                );
            } else if last_display.elapsed() > config.display_interval {
                tracing::info!(
                    "{} current {} ({}) incumbent {} mean_weight {:.3} {:.2}s",
                    iterations,
                    current.objective(),
                    current.objective() + current.weighted_penalty(),
                    incumbent.objective(),
                    current.mean_weight(),
                    elapsed.as_secs_f64()
                );
                last_display = Instant::now();
            }
            cost_history.push(incumbent.objective());
        }

        WlsResult {
            assignment: incumbent.assignment().to_vec(),
            objective: incumbent.objective(),
            feasible: incumbent.is_feasible(instance),
            iterations,
            best_iteration,
            elapsed: start.elapsed(),
            cost_history,
        }
    }
}
