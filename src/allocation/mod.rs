//! Allocation engine.
//!
//! - [`GreedyAllocator`] / [`allocate`] — deadline-first greedy matching of
//!   deliveries to (distribution center, truck) pairs through a
//!   [`DistanceOracle`](crate::shortest_path::DistanceOracle)

mod greedy;

pub use greedy::{allocate, GreedyAllocator, AVERAGE_SPEED};
