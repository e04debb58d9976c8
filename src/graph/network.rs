//! Both graph representations built from one distance table.

use super::{AdjacencyList, AdjacencyMatrix, DistanceTable, Scale};
use crate::models::NodeId;
use crate::shortest_path::{Strategy, StrategyOracle};

/// A distance table together with its sparse and dense graphs.
///
/// # Examples
///
/// ```
/// use u_fleet::graph::{DistanceTable, Network};
/// use u_fleet::shortest_path::Strategy;
///
/// let network = Network::from_table(DistanceTable::brazilian_network());
/// assert_eq!(network.distance(Strategy::HeapList, "São Paulo", "Rio de Janeiro"), 450.0);
/// assert!(network.distance(Strategy::HeapMatrix, "Rio de Janeiro", "São Paulo").is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    table: DistanceTable,
    list: AdjacencyList,
    matrix: AdjacencyMatrix,
}

impl Network {
    /// Builds both representations of a table.
    pub fn from_table(table: DistanceTable) -> Self {
        let list = AdjacencyList::from_table(&table);
        let matrix = AdjacencyMatrix::from_table(&table);
        Self { table, list, matrix }
    }

    /// The source table.
    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    /// Distribution centers, in canonical order.
    pub fn centers(&self) -> &[NodeId] {
        self.table.centers()
    }

    /// The adjacency-list graph.
    pub fn list(&self) -> &AdjacencyList {
        &self.list
    }

    /// The adjacency-matrix graph.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// A distance oracle running `strategy` on the matching representation.
    pub fn oracle(&self, strategy: Strategy) -> StrategyOracle<'_> {
        StrategyOracle::new(self, strategy)
    }

    /// Shortest distance between two named nodes using `strategy`.
    pub fn distance(&self, strategy: Strategy, origin: &str, target: &str) -> f64 {
        strategy.distance(self, &NodeId::new(origin), &NodeId::new(target))
    }
}

impl Scale for Network {
    /// Scales both graphs. The table keeps the unscaled source distances.
    fn scaled(&self, factor: f64) -> Self {
        Self {
            table: self.table.clone(),
            list: self.list.scaled(factor),
            matrix: self.matrix.scaled(factor),
        }
    }
}
