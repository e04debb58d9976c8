//! Dense adjacency-matrix graph.

use super::{DistanceTable, Graph, Scale};
use crate::models::NodeId;
use crate::shortest_path::UNREACHABLE;
use std::collections::HashMap;

/// An n×n adjacency matrix stored in row-major order.
///
/// Nodes are indexed centers first, then destinations, in table order.
/// Only the center→destination cells are populated; every other cell,
/// including destination→center, stays [`UNREACHABLE`]. Queries that start
/// at a destination therefore find no path in this representation even
/// though the adjacency list has one.
///
/// # Examples
///
/// ```
/// use u_fleet::graph::{AdjacencyMatrix, DistanceTable};
///
/// let table = DistanceTable::new(["Recife"], ["Natal"]).with_distance("Recife", "Natal", 300.0);
/// let matrix = AdjacencyMatrix::from_table(&table);
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.get(0, 1), 300.0);
/// assert!(matrix.get(1, 0).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    data: Vec<f64>,
    size: usize,
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl AdjacencyMatrix {
    /// Creates a matrix over the given nodes with every cell unreachable.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        let size = nodes.len();
        let index = nodes.iter().enumerate().map(|(i, n)| (n.clone(), i)).collect();
        Self {
            data: vec![UNREACHABLE; size * size],
            size,
            nodes,
            index,
        }
    }

    /// Builds the center→destination matrix of a distance table.
    ///
    /// Pairs whose center or destination is missing from the table's node
    /// lists have no cell and are left out.
    pub fn from_table(table: &DistanceTable) -> Self {
        let mut matrix = Self::new(table.nodes().cloned().collect());
        let centers = table.centers().len();
        for entry in table.entries() {
            let from = table.centers().iter().position(|c| *c == entry.center);
            let to = table
                .destinations()
                .iter()
                .position(|d| *d == entry.destination)
                .map(|j| centers + j);
            if let (Some(i), Some(j)) = (from, to) {
                matrix.set(i, j, entry.distance);
            }
        }
        matrix
    }

    /// Returns the edge weight from index `from` to index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the edge weight from index `from` to index `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// The row of outgoing weights of index `from`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of a node, if it belongs to the matrix.
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Node at an index.
    pub fn node(&self, index: usize) -> &NodeId {
        &self.nodes[index]
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The edge weight between two named nodes; unknown nodes are unreachable.
    pub fn edge(&self, from: &str, to: &str) -> f64 {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.get(i, j),
            _ => UNREACHABLE,
        }
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two unreachable cells count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a.is_infinite() && b.is_infinite() {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl Graph for AdjacencyMatrix {
    fn for_each_neighbor<F>(&self, node: &NodeId, mut visit: F)
    where
        F: FnMut(&NodeId, f64),
    {
        let Some(i) = self.index_of(node.as_str()) else {
            return;
        };
        for (j, &distance) in self.row(i).iter().enumerate() {
            if distance != UNREACHABLE {
                visit(&self.nodes[j], distance);
            }
        }
    }
}

impl Scale for AdjacencyMatrix {
    fn scaled(&self, factor: f64) -> Self {
        let data = self
            .data
            .iter()
            .map(|&d| if d == UNREACHABLE { UNREACHABLE } else { d * factor })
            .collect();
        Self {
            data,
            size: self.size,
            nodes: self.nodes.clone(),
            index: self.index.clone(),
        }
    }
}
