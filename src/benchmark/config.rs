//! Benchmark configuration.

use super::BenchmarkError;
use crate::shortest_path::Strategy;
use serde::{Deserialize, Serialize};

/// Scale factors applied to edge weights by default.
pub const DEFAULT_SCALE_FACTORS: [f64; 5] = [0.5, 0.75, 1.0, 1.25, 1.5];

/// What to measure and how many worker threads to use.
///
/// Missing fields take their defaults when deserialized:
///
/// ```
/// use u_fleet::benchmark::BenchmarkConfig;
///
/// let config: BenchmarkConfig = serde_json::from_str(r#"{ "scale_factors": [1.0, 2.0] }"#).unwrap();
/// assert_eq!(config.scale_factors, vec![1.0, 2.0]);
/// assert_eq!(config.strategies.len(), 4);
/// assert!(config.num_threads >= 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Multipliers applied to every edge weight, one parallel task each.
    pub scale_factors: Vec<f64>,
    /// Strategies run inside each task, in order.
    pub strategies: Vec<Strategy>,
    /// Size of the worker pool.
    pub num_threads: usize,
}

impl BenchmarkConfig {
    /// Replaces the scale factors.
    pub fn with_scale_factors(mut self, scale_factors: impl Into<Vec<f64>>) -> Self {
        self.scale_factors = scale_factors.into();
        self
    }

    /// Replaces the strategies.
    pub fn with_strategies(mut self, strategies: impl Into<Vec<Strategy>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    /// Sets the worker pool size.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Checks that the configuration can run.
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.num_threads == 0 {
            return Err(BenchmarkError::InvalidConfig("num_threads must be at least 1".into()));
        }
        if self.strategies.is_empty() {
            return Err(BenchmarkError::InvalidConfig("no strategy selected".into()));
        }
        if let Some(bad) = self.scale_factors.iter().find(|f| !f.is_finite() || **f < 0.0) {
            return Err(BenchmarkError::InvalidConfig(format!(
                "scale factor {bad} must be finite and non-negative"
            )));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            scale_factors: DEFAULT_SCALE_FACTORS.to_vec(),
            strategies: Strategy::ALL.to_vec(),
            num_threads: num_cpus::get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.scale_factors, DEFAULT_SCALE_FACTORS.to_vec());
        assert_eq!(config.strategies, Strategy::ALL.to_vec());
        assert!(config.num_threads >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BenchmarkConfig::default()
            .with_scale_factors([2.0])
            .with_strategies([Strategy::HeapList])
            .with_num_threads(2);
        assert_eq!(config.scale_factors, vec![2.0]);
        assert_eq!(config.strategies, vec![Strategy::HeapList]);
        assert_eq!(config.num_threads, 2);
    }

    #[test]
    fn test_validate_rejects() {
        let zero_threads = BenchmarkConfig::default().with_num_threads(0);
        assert!(matches!(zero_threads.validate(), Err(BenchmarkError::InvalidConfig(_))));

        let no_strategies = BenchmarkConfig::default().with_strategies(Vec::new());
        assert!(no_strategies.validate().is_err());

        let negative = BenchmarkConfig::default().with_scale_factors([1.0, -0.5]);
        assert!(negative.validate().is_err());

        let nan = BenchmarkConfig::default().with_scale_factors([f64::NAN]);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_deserialize_strategies() {
        let config: BenchmarkConfig =
            serde_json::from_str(r#"{ "strategies": ["HeapList", "LinearMatrix"], "num_threads": 3 }"#)
                .expect("valid json");
        assert_eq!(config.strategies, vec![Strategy::HeapList, Strategy::LinearMatrix]);
        assert_eq!(config.num_threads, 3);
        assert_eq!(config.scale_factors, DEFAULT_SCALE_FACTORS.to_vec());
    }
}
