//! Benchmark error type.

use std::fmt;

/// A benchmark run that could not complete.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    /// The configuration cannot run.
    InvalidConfig(String),
    /// The worker pool could not be built.
    ThreadPool(String),
    /// The task of a scale factor panicked.
    TaskPanicked {
        /// Scale factor of the failed task.
        scale_factor: f64,
        /// Panic payload, when it was a string.
        message: String,
    },
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkError::InvalidConfig(msg) => write!(f, "invalid benchmark config: {msg}"),
            BenchmarkError::ThreadPool(msg) => write!(f, "cannot build worker pool: {msg}"),
            BenchmarkError::TaskPanicked { scale_factor, message } => {
                write!(f, "task for scale factor {scale_factor} panicked: {message}")
            }
        }
    }
}

impl std::error::Error for BenchmarkError {}
