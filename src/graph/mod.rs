//! Graph model: the distance table and its two representations.
//!
//! - [`DistanceTable`] — authoritative center→destination distances
//! - [`AdjacencyList`] — sparse, bidirectional
//! - [`AdjacencyMatrix`] — dense, center→destination only
//! - [`Network`] — both representations of one table

mod dense;
mod network;
mod sparse;
mod table;

pub use dense::AdjacencyMatrix;
pub use network::Network;
pub use sparse::AdjacencyList;
pub use table::{DistanceEntry, DistanceTable};

use crate::models::NodeId;

/// A weighted directed graph that can enumerate outgoing edges.
pub trait Graph {
    /// Calls `visit` with every reachable neighbor of `node` and the edge
    /// weight. Unknown nodes have no neighbors.
    fn for_each_neighbor<F>(&self, node: &NodeId, visit: F)
    where
        F: FnMut(&NodeId, f64);
}

/// Uniform edge-weight scaling.
pub trait Scale {
    /// Returns a copy with every finite edge weight multiplied by `factor`.
    /// Unreachable entries stay unreachable.
    fn scaled(&self, factor: f64) -> Self;
}
