//! Frontier collections for lazy Dijkstra.

use crate::models::NodeId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A tentative (distance, node) pair waiting in a frontier.
///
/// Ordered by distance first, then by node ID, so every frontier extracts
/// the same candidate among equal distances.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Tentative distance from the origin.
    pub distance: f64,
    /// Node reached at that distance.
    pub node: NodeId,
}

impl Candidate {
    /// Creates a candidate.
    pub fn new(distance: f64, node: NodeId) -> Self {
        Self { distance, node }
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// The working set of not-yet-finalized candidates.
///
/// Duplicates are allowed; the search discards stale ones through its
/// visited set.
pub trait Frontier: Default {
    /// Adds a candidate.
    fn push(&mut self, candidate: Candidate);

    /// Removes and returns the smallest candidate.
    fn pop_min(&mut self) -> Option<Candidate>;

    /// Number of queued candidates.
    fn len(&self) -> usize;

    /// Returns `true` if no candidate is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Binary-heap frontier: O(log n) push and extraction.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<Candidate>>,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, candidate: Candidate) {
        self.heap.push(Reverse(candidate));
    }

    fn pop_min(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(c)| c)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Plain-vector frontier: O(1) push, O(n) scan-and-remove extraction.
#[derive(Debug, Default)]
pub struct LinearFrontier {
    items: Vec<Candidate>,
}

impl Frontier for LinearFrontier {
    fn push(&mut self, candidate: Candidate) {
        self.items.push(candidate);
    }

    fn pop_min(&mut self) -> Option<Candidate> {
        if self.items.is_empty() {
            return None;
        }
        let mut best = 0;
        for (i, candidate) in self.items.iter().enumerate().skip(1) {
            if *candidate < self.items[best] {
                best = i;
            }
        }
        Some(self.items.remove(best))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(distance: f64, node: &str) -> Candidate {
        Candidate::new(distance, NodeId::new(node))
    }

    fn drain<F: Frontier>(mut frontier: F) -> Vec<Candidate> {
        let mut out = Vec::new();
        while let Some(next) = frontier.pop_min() {
            out.push(next);
        }
        out
    }

    fn fill<F: Frontier>() -> F {
        let mut f = F::default();
        for cand in [c(5.0, "E"), c(1.0, "B"), c(3.0, "C"), c(1.0, "A"), c(3.0, "C")] {
            f.push(cand);
        }
        f
    }

    #[test]
    fn test_candidate_ordering() {
        assert!(c(1.0, "Z") < c(2.0, "A"));
        assert!(c(1.0, "A") < c(1.0, "B"));
        assert_eq!(c(1.0, "A").cmp(&c(1.0, "A")), Ordering::Equal);
        assert!(c(f64::INFINITY, "A") > c(1e300, "Z"));
    }

    #[test]
    fn test_heap_extracts_in_order() {
        let order = drain(fill::<HeapFrontier>());
        let expected = vec![c(1.0, "A"), c(1.0, "B"), c(3.0, "C"), c(3.0, "C"), c(5.0, "E")];
        assert_eq!(order, expected);
    }

    #[test]
    fn test_linear_matches_heap() {
        assert_eq!(drain(fill::<LinearFrontier>()), drain(fill::<HeapFrontier>()));
    }

    #[test]
    fn test_empty_frontier() {
        let mut heap = HeapFrontier::default();
        let mut linear = LinearFrontier::default();
        assert!(heap.is_empty());
        assert!(linear.is_empty());
        assert!(heap.pop_min().is_none());
        assert!(linear.pop_min().is_none());
    }

    #[test]
    fn test_len_tracks_duplicates() {
        let f = fill::<LinearFrontier>();
        assert_eq!(f.len(), 5);
        let h = fill::<HeapFrontier>();
        assert_eq!(h.len(), 5);
    }
}
