//! Sparse adjacency-list graph.

use super::{DistanceTable, Graph, Scale};
use crate::models::NodeId;
use std::collections::HashMap;

/// A symmetric adjacency-list graph.
///
/// Every recorded center-destination distance produces an edge in both
/// directions, so any pair reachable one way is reachable the other way
/// at the same distance.
///
/// # Examples
///
/// ```
/// use u_fleet::graph::{AdjacencyList, DistanceTable};
///
/// let table = DistanceTable::new(["Recife"], ["Natal"]).with_distance("Recife", "Natal", 300.0);
/// let graph = AdjacencyList::from_table(&table);
/// assert_eq!(graph.edge("Recife", "Natal"), Some(300.0));
/// assert_eq!(graph.edge("Natal", "Recife"), Some(300.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    adjacency: HashMap<NodeId, Vec<(NodeId, f64)>>,
}

impl AdjacencyList {
    /// Builds the bidirectional graph of a distance table.
    pub fn from_table(table: &DistanceTable) -> Self {
        let mut graph = Self::default();
        for entry in table.entries() {
            graph.add_edge(entry.center.clone(), entry.destination.clone(), entry.distance);
            graph.add_edge(entry.destination.clone(), entry.center.clone(), entry.distance);
        }
        graph
    }

    /// Adds a directed edge.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, distance: f64) {
        self.adjacency.entry(from).or_default().push((to, distance));
    }

    /// Recorded neighbors of a node, in insertion order.
    pub fn neighbors(&self, node: &str) -> &[(NodeId, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The direct edge weight from `from` to `to`, if recorded.
    pub fn edge(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|(n, _)| n.as_str() == to)
            .map(|&(_, d)| d)
    }

    /// Number of nodes with at least one outgoing edge.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl Graph for AdjacencyList {
    fn for_each_neighbor<F>(&self, node: &NodeId, mut visit: F)
    where
        F: FnMut(&NodeId, f64),
    {
        for (neighbor, distance) in self.neighbors(node.as_str()) {
            visit(neighbor, *distance);
        }
    }
}

impl Scale for AdjacencyList {
    fn scaled(&self, factor: f64) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .map(|(node, edges)| {
                let edges = edges.iter().map(|(n, d)| (n.clone(), d * factor)).collect();
                (node.clone(), edges)
            })
            .collect();
        Self { adjacency }
    }
}
