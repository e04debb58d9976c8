//! Parallel benchmark harness.

use super::{
    BenchmarkConfig, BenchmarkError, BenchmarkReport, Measurement, MemoryProbe, ScaleReport, TrackingAllocator,
};
use crate::allocation::GreedyAllocator;
use crate::generator::Scenario;
use crate::graph::{Network, Scale};
use crate::models::{Delivery, Truck};
use crate::shortest_path::Strategy;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info};

/// Measures every configured strategy at every configured scale factor.
///
/// Each scale factor is one task on a dedicated worker pool. A task scales
/// the network, then runs the strategies one after another, each on a fresh
/// copy of the trucks. The allocations themselves are dropped; only the
/// measurements and allocation counts are kept.
///
/// # Examples
///
/// ```
/// use u_fleet::benchmark::{Benchmark, BenchmarkConfig};
/// use u_fleet::graph::{DistanceTable, Network};
/// use u_fleet::models::{Delivery, Truck};
///
/// let network = Network::from_table(DistanceTable::brazilian_network());
/// let deliveries = vec![Delivery::new(0, "Natal", 100, 48.0).unwrap()];
/// let trucks = vec![Truck::new(0, 1000, 40.0).unwrap()];
///
/// let config = BenchmarkConfig::default().with_scale_factors([1.0, 2.0]).with_num_threads(2);
/// let report = Benchmark::new(config).run(&deliveries, &trucks, &network).unwrap();
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.get(2.0).unwrap().measurements.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
    allocator: GreedyAllocator,
}

impl Benchmark {
    /// Creates a benchmark with the default allocator.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            allocator: GreedyAllocator::new(),
        }
    }

    /// Replaces the allocator being measured.
    pub fn with_allocator(mut self, allocator: GreedyAllocator) -> Self {
        self.allocator = allocator;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the benchmark. `trucks` is never modified.
    ///
    /// Scale reports come back in configuration order whatever order the
    /// tasks finish in. A panicking task fails the whole run.
    pub fn run(
        &self,
        deliveries: &[Delivery],
        trucks: &[Truck],
        network: &Network,
    ) -> Result<BenchmarkReport, BenchmarkError> {
        info!(
            scales = self.config.scale_factors.len(),
            strategies = self.config.strategies.len(),
            deliveries = deliveries.len(),
            trucks = trucks.len(),
            threads = self.config.num_threads,
            "benchmark started"
        );

        let scales =
            self.run_tasks(|scale_factor| self.run_scale(scale_factor, deliveries, trucks, network))?;

        info!(scales = scales.len(), "benchmark finished");
        Ok(BenchmarkReport::new(scales))
    }

    /// Runs the benchmark on a scenario and labels the report with its name.
    pub fn run_scenario(&self, scenario: &Scenario, network: &Network) -> Result<BenchmarkReport, BenchmarkError> {
        let report = self.run(&scenario.deliveries, &scenario.trucks, network)?;
        Ok(report.with_scenario(scenario.name.clone()))
    }

    /// Runs `task` once per configured scale factor on the worker pool.
    fn run_tasks<T>(&self, task: T) -> Result<Vec<ScaleReport>, BenchmarkError>
    where
        T: Fn(f64) -> ScaleReport + Sync,
    {
        self.config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads)
            .build()
            .map_err(|err| BenchmarkError::ThreadPool(err.to_string()))?;

        pool.install(|| {
            self.config
                .scale_factors
                .par_iter()
                .map(|&scale_factor| {
                    catch_unwind(AssertUnwindSafe(|| task(scale_factor))).map_err(|payload| {
                        BenchmarkError::TaskPanicked {
                            scale_factor,
                            message: panic_message(payload.as_ref()),
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
    }

    fn run_scale(
        &self,
        scale_factor: f64,
        deliveries: &[Delivery],
        trucks: &[Truck],
        network: &Network,
    ) -> ScaleReport {
        let scaled = network.scaled(scale_factor);
        let mut measurements = BTreeMap::new();

        for &strategy in &self.config.strategies {
            let measurement = self.measure(strategy, deliveries, trucks, &scaled);
            debug!(
                scale_factor,
                strategy = strategy.name(),
                elapsed_us = measurement.elapsed.as_micros() as u64,
                peak_memory = measurement.peak_memory,
                allocated = measurement.allocated,
                "strategy measured"
            );
            measurements.insert(strategy, measurement);
        }

        debug!(scale_factor, "scale task done");
        ScaleReport {
            scale_factor,
            measurements,
        }
    }

    fn measure(
        &self,
        strategy: Strategy,
        deliveries: &[Delivery],
        trucks: &[Truck],
        network: &Network,
    ) -> Measurement {
        let mut fleet = trucks.to_vec();
        let oracle = network.oracle(strategy);

        let probe = MemoryProbe::start();
        let start = Instant::now();
        let allocation = self.allocator.allocate(deliveries, &mut fleet, network.centers(), &oracle);
        let elapsed = start.elapsed();
        let peak_memory = TrackingAllocator::is_active().then(|| probe.peak_bytes());

        Measurement {
            elapsed,
            peak_memory,
            allocated: allocation.num_allocated(),
            unallocated: allocation.num_unallocated(),
        }
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new(BenchmarkConfig::default())
    }
}

/// Benchmarks `scale_factors` with every strategy and one thread per core.
pub fn benchmark(
    scale_factors: &[f64],
    deliveries: &[Delivery],
    trucks: &[Truck],
    network: &Network,
) -> Result<BenchmarkReport, BenchmarkError> {
    let config = BenchmarkConfig::default().with_scale_factors(scale_factors);
    Benchmark::new(config).run(deliveries, trucks, network)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
