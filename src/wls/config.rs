//! Weighting local search configuration.

use std::time::Duration;

/// Configuration for the weighting local search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use gap_wls::wls::WlsConfig;
///
/// let config = WlsConfig::default()
///     .with_time_limit(Duration::from_secs(10))
///     .with_seed(42);
/// assert_eq!(config.time_limit, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct WlsConfig {
    /// Wall-clock budget for the whole search.
    ///
    /// Checked only between outer iterations, so a run may overshoot by
    /// the duration of one full descent.
    pub time_limit: Duration,

    /// Numerical tolerance for comparisons on the weighted objective.
    ///
    /// Also the floor below which penalty weights never decay; this
    /// prevents move cycling on near-zero deltas.
    pub epsilon: f64,

    /// Multiplicative growth applied to the weight of the most violated
    /// agent when the search closes in on the incumbent, in (0, 1).
    pub weight_increase_ratio: f64,

    /// Multiplicative decay applied to every weight while the weighted
    /// cost cannot beat the incumbent, in (0, 1).
    pub weight_decrease_ratio: f64,

    /// Minimum interval between progress log lines that are not
    /// incumbent improvements.
    pub display_interval: Duration,

    /// Random seed (`None` for the fixed default seed).
    pub seed: Option<u64>,
}

impl Default for WlsConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            epsilon: 1e-3,
            weight_increase_ratio: 0.2,
            weight_decrease_ratio: 0.1,
            display_interval: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl WlsConfig {
    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the numerical tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the weight growth and decay ratios.
    pub fn with_weight_ratios(mut self, increase: f64, decrease: f64) -> Self {
        self.weight_increase_ratio = increase;
        self.weight_decrease_ratio = decrease;
        self
    }

    /// Sets the progress display interval.
    pub fn with_display_interval(mut self, interval: Duration) -> Self {
        self.display_interval = interval;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        if self.epsilon <= 0.0 {
            return Err(format!("epsilon must be positive, got {}", self.epsilon));
        }
        if self.weight_increase_ratio <= 0.0 || self.weight_increase_ratio >= 1.0 {
            return Err(format!(
                "weight_increase_ratio must be in (0, 1), got {}",
                self.weight_increase_ratio
            ));
        }
        if self.weight_decrease_ratio <= 0.0 || self.weight_decrease_ratio >= 1.0 {
            return Err(format!(
                "weight_decrease_ratio must be in (0, 1), got {}",
                self.weight_decrease_ratio
            ));
        }
        if self.display_interval.is_zero() {
            return Err("display_interval must be positive".into());
        }
        Ok(())
    }
}
