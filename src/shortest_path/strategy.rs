//! Strategy selector over graph representation × frontier.

use super::{dijkstra, DistanceOracle, HeapFrontier, LinearFrontier};
use crate::graph::Network;
use crate::models::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four shortest-path strategies.
///
/// All four return the same distance for pairs the queried representation
/// can reach. They differ in cost: linear frontiers scan every queued
/// candidate on extraction, matrix graphs scan a full row per expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Linear-scan frontier on the adjacency list.
    LinearList,
    /// Binary-heap frontier on the adjacency list.
    HeapList,
    /// Linear-scan frontier on the adjacency matrix.
    LinearMatrix,
    /// Binary-heap frontier on the adjacency matrix.
    HeapMatrix,
}

impl Strategy {
    /// Every strategy, in benchmark order.
    pub const ALL: [Strategy; 4] = [
        Strategy::LinearList,
        Strategy::HeapList,
        Strategy::LinearMatrix,
        Strategy::HeapMatrix,
    ];

    /// Human-readable label.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::LinearList => "Linear (List)",
            Strategy::HeapList => "Heap (List)",
            Strategy::LinearMatrix => "Linear (Matrix)",
            Strategy::HeapMatrix => "Heap (Matrix)",
        }
    }

    /// Returns `true` for the adjacency-matrix strategies.
    pub fn uses_matrix(self) -> bool {
        matches!(self, Strategy::LinearMatrix | Strategy::HeapMatrix)
    }

    /// Runs this strategy on the matching representation of `network`.
    pub fn distance(self, network: &Network, origin: &NodeId, target: &NodeId) -> f64 {
        match self {
            Strategy::LinearList => dijkstra::<LinearFrontier, _>(network.list(), origin, target),
            Strategy::HeapList => dijkstra::<HeapFrontier, _>(network.list(), origin, target),
            Strategy::LinearMatrix => dijkstra::<LinearFrontier, _>(network.matrix(), origin, target),
            Strategy::HeapMatrix => dijkstra::<HeapFrontier, _>(network.matrix(), origin, target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A [`DistanceOracle`] bound to one network and one strategy.
#[derive(Debug, Clone, Copy)]
pub struct StrategyOracle<'a> {
    network: &'a Network,
    strategy: Strategy,
}

impl<'a> StrategyOracle<'a> {
    /// Binds `strategy` to `network`.
    pub fn new(network: &'a Network, strategy: Strategy) -> Self {
        Self { network, strategy }
    }

    /// The bound strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl DistanceOracle for StrategyOracle<'_> {
    fn distance(&self, origin: &NodeId, target: &NodeId) -> f64 {
        self.strategy.distance(self.network, origin, target)
    }
}
