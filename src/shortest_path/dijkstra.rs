//! Single-pair Dijkstra with early exit and a lazy frontier.

use super::{Candidate, Frontier, UNREACHABLE};
use crate::graph::Graph;
use crate::models::NodeId;
use std::collections::HashSet;

/// Computes the shortest distance from `origin` to `target`.
///
/// The search stops as soon as `target` is extracted from the frontier.
/// Relaxation pushes a fresh candidate for every unvisited neighbor without
/// looking for an existing one; stale duplicates are dropped when they are
/// extracted after their node was already visited.
///
/// Returns [`UNREACHABLE`] if the frontier runs dry first.
///
/// # Examples
///
/// ```
/// use u_fleet::graph::{AdjacencyList, DistanceTable};
/// use u_fleet::models::NodeId;
/// use u_fleet::shortest_path::{dijkstra, HeapFrontier};
///
/// let table = DistanceTable::new(["A", "B"], ["X"])
///     .with_distance("A", "X", 4.0)
///     .with_distance("B", "X", 1.0);
/// let graph = AdjacencyList::from_table(&table);
/// let d = dijkstra::<HeapFrontier, _>(&graph, &NodeId::new("A"), &NodeId::new("B"));
/// assert_eq!(d, 5.0);
/// ```
pub fn dijkstra<F, G>(graph: &G, origin: &NodeId, target: &NodeId) -> f64
where
    F: Frontier,
    G: Graph + ?Sized,
{
    let mut frontier = F::default();
    let mut visited: HashSet<NodeId> = HashSet::new();
    frontier.push(Candidate::new(0.0, origin.clone()));

    while let Some(Candidate { distance, node }) = frontier.pop_min() {
        if node == *target {
            return distance;
        }
        if !visited.insert(node.clone()) {
            continue;
        }
        graph.for_each_neighbor(&node, |neighbor, weight| {
            if !visited.contains(neighbor) {
                frontier.push(Candidate::new(distance + weight, neighbor.clone()));
            }
        });
    }

    UNREACHABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyList, AdjacencyMatrix, DistanceTable};
    use crate::shortest_path::{HeapFrontier, LinearFrontier};

    fn n(name: &str) -> NodeId {
        NodeId::new(name)
    }

    // Two centers share destination X; A->Y is direct but long.
    fn diamond() -> DistanceTable {
        DistanceTable::new(["A", "B"], ["X", "Y"])
            .with_distance("A", "X", 1.0)
            .with_distance("B", "X", 1.0)
            .with_distance("B", "Y", 1.0)
            .with_distance("A", "Y", 10.0)
    }

    #[test]
    fn test_same_node_is_zero() {
        let g = AdjacencyList::from_table(&diamond());
        assert_eq!(dijkstra::<HeapFrontier, _>(&g, &n("A"), &n("A")), 0.0);
        assert_eq!(dijkstra::<LinearFrontier, _>(&g, &n("Q"), &n("Q")), 0.0);
    }

    #[test]
    fn test_multi_hop_beats_direct_edge() {
        let g = AdjacencyList::from_table(&diamond());
        // A -> X -> B -> Y = 3 < 10
        assert_eq!(dijkstra::<HeapFrontier, _>(&g, &n("A"), &n("Y")), 3.0);
        assert_eq!(dijkstra::<LinearFrontier, _>(&g, &n("A"), &n("Y")), 3.0);
    }

    #[test]
    fn test_matrix_has_no_multi_hop() {
        let m = AdjacencyMatrix::from_table(&diamond());
        // Center rows only reach destinations; destinations reach nothing.
        assert_eq!(dijkstra::<HeapFrontier, _>(&m, &n("A"), &n("Y")), 10.0);
        assert_eq!(dijkstra::<LinearFrontier, _>(&m, &n("A"), &n("B")), UNREACHABLE);
    }

    #[test]
    fn test_unknown_nodes_unreachable() {
        let g = AdjacencyList::from_table(&diamond());
        assert_eq!(dijkstra::<HeapFrontier, _>(&g, &n("A"), &n("Nowhere")), UNREACHABLE);
        assert_eq!(dijkstra::<LinearFrontier, _>(&g, &n("Nowhere"), &n("A")), UNREACHABLE);
    }

    #[test]
    fn test_disconnected_component() {
        let table = DistanceTable::new(["A", "B"], ["X", "Y"])
            .with_distance("A", "X", 2.0)
            .with_distance("B", "Y", 3.0);
        let g = AdjacencyList::from_table(&table);
        assert_eq!(dijkstra::<HeapFrontier, _>(&g, &n("A"), &n("Y")), UNREACHABLE);
        assert_eq!(dijkstra::<HeapFrontier, _>(&g, &n("Y"), &n("B")), 3.0);
    }

    #[test]
    fn test_zero_weight_edges() {
        let table = DistanceTable::new(["A"], ["X", "Y"])
            .with_distance("A", "X", 0.0)
            .with_distance("A", "Y", 0.0);
        let g = AdjacencyList::from_table(&table);
        assert_eq!(dijkstra::<LinearFrontier, _>(&g, &n("X"), &n("Y")), 0.0);
    }
}
