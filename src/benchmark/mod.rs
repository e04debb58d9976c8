//! Benchmark harness.
//!
//! - [`Benchmark`] / [`benchmark`] — time and peak memory of the greedy
//!   allocator per shortest-path strategy, one parallel task per scale factor
//! - [`BenchmarkConfig`] — scale factors, strategies, pool size
//! - [`BenchmarkReport`] — per-scale measurements, flattenable into records
//! - [`TrackingAllocator`] / [`MemoryProbe`] — per-thread peak heap usage

mod config;
mod error;
mod memory;
mod report;
mod runner;

pub use config::{BenchmarkConfig, DEFAULT_SCALE_FACTORS};
pub use error::BenchmarkError;
pub use memory::{MemoryProbe, TrackingAllocator};
pub use report::{BenchmarkRecord, BenchmarkReport, Measurement, ScaleReport};
pub use runner::{benchmark, Benchmark};
