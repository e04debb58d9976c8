//! Benchmark measurements and reports.

use crate::shortest_path::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Time and peak heap usage of one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Wall-clock duration.
    pub elapsed: Duration,
    /// Peak heap bytes above the starting point, `None` when the tracking
    /// allocator is not installed.
    pub peak_memory: Option<usize>,
    /// Deliveries the run assigned.
    pub allocated: usize,
    /// Deliveries the run left unassigned.
    pub unallocated: usize,
}

/// All strategy measurements for one scale factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleReport {
    /// Edge-weight multiplier of this run.
    pub scale_factor: f64,
    /// Measurements keyed by strategy.
    pub measurements: BTreeMap<Strategy, Measurement>,
}

/// One flattened (scenario, scale, strategy) row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Scenario label, if the report has one.
    pub scenario: Option<String>,
    /// Edge-weight multiplier.
    pub scale_factor: f64,
    /// Strategy measured.
    pub strategy: Strategy,
    /// Wall-clock duration.
    pub elapsed: Duration,
    /// Peak heap bytes, `None` when not tracked.
    pub peak_memory: Option<usize>,
    /// Deliveries assigned.
    pub allocated: usize,
    /// Deliveries left unassigned.
    pub unallocated: usize,
}

/// Results of a benchmark run, one entry per scale factor in the order
/// they were configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    #[serde(default)]
    scenario: Option<String>,
    scales: Vec<ScaleReport>,
}

impl BenchmarkReport {
    /// Wraps per-scale reports.
    pub fn new(scales: Vec<ScaleReport>) -> Self {
        Self { scenario: None, scales }
    }

    /// Labels the report with the scenario it measured.
    pub fn with_scenario(mut self, name: impl Into<String>) -> Self {
        self.scenario = Some(name.into());
        self
    }

    /// Scenario label, if any.
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    /// Per-scale reports.
    pub fn scales(&self) -> &[ScaleReport] {
        &self.scales
    }

    /// The report of an exact scale factor.
    pub fn get(&self, scale_factor: f64) -> Option<&ScaleReport> {
        self.scales.iter().find(|s| s.scale_factor == scale_factor)
    }

    /// Flattens the report into rows, scale-major, strategies in
    /// [`Strategy`] order.
    pub fn records(&self) -> Vec<BenchmarkRecord> {
        self.scales
            .iter()
            .flat_map(|scale| {
                scale.measurements.iter().map(move |(&strategy, m)| BenchmarkRecord {
                    scenario: self.scenario.clone(),
                    scale_factor: scale.scale_factor,
                    strategy,
                    elapsed: m.elapsed,
                    peak_memory: m.peak_memory,
                    allocated: m.allocated,
                    unallocated: m.unallocated,
                })
            })
            .collect()
    }

    /// Number of scale factors measured.
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Returns `true` if nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
