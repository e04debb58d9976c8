//! Shortest-path engine.
//!
//! Four interchangeable single-pair Dijkstra strategies, one per combination
//! of graph representation ([`AdjacencyList`](crate::graph::AdjacencyList) or
//! [`AdjacencyMatrix`](crate::graph::AdjacencyMatrix)) and frontier
//! ([`HeapFrontier`] or [`LinearFrontier`]).
//!
//! - [`dijkstra`] — generic search with early exit, O((V + E) log E) on a heap
//! - [`Strategy`] — runtime selector over the four combinations
//! - [`DistanceOracle`] — the origin/destination query the allocator consumes

mod dijkstra;
mod frontier;
mod strategy;

pub use dijkstra::dijkstra;
pub use frontier::{Candidate, Frontier, HeapFrontier, LinearFrontier};
pub use strategy::{Strategy, StrategyOracle};

use crate::models::NodeId;

/// Distance reported for pairs with no path. Larger than any finite distance.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Answers origin→destination distance queries.
///
/// Implemented for every `Fn(&NodeId, &NodeId) -> f64` closure, so synthetic
/// oracles can be passed directly.
pub trait DistanceOracle {
    /// Shortest distance, or [`UNREACHABLE`].
    fn distance(&self, origin: &NodeId, target: &NodeId) -> f64;
}

impl<F> DistanceOracle for F
where
    F: Fn(&NodeId, &NodeId) -> f64,
{
    fn distance(&self, origin: &NodeId, target: &NodeId) -> f64 {
        self(origin, target)
    }
}
