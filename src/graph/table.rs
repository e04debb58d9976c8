//! Authoritative center-to-destination distance table.

use crate::models::NodeId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One recorded distance between a distribution center and a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    /// Distribution center.
    pub center: NodeId,
    /// Destination.
    pub destination: NodeId,
    /// Road distance.
    pub distance: f64,
}

/// Distances between distribution centers and destinations.
///
/// Both graph representations are built from one table, so they agree on
/// every recorded pair. The center and destination lists fix the node
/// ordering of the dense representation: centers first, then destinations.
///
/// # Examples
///
/// ```
/// use u_fleet::graph::DistanceTable;
///
/// let table = DistanceTable::new(["Recife"], ["Natal", "Salvador"])
///     .with_distance("Recife", "Natal", 300.0)
///     .with_distance("Recife", "Salvador", 800.0);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.distance("Recife", "Natal"), Some(300.0));
/// assert_eq!(table.distance("Natal", "Recife"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistanceTable {
    centers: Vec<NodeId>,
    destinations: Vec<NodeId>,
    entries: Vec<DistanceEntry>,
}

impl DistanceTable {
    /// Creates an empty table over the given centers and destinations.
    pub fn new<C, D>(centers: C, destinations: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<NodeId>,
        D: IntoIterator,
        D::Item: Into<NodeId>,
    {
        Self {
            centers: centers.into_iter().map(Into::into).collect(),
            destinations: destinations.into_iter().map(Into::into).collect(),
            entries: Vec::new(),
        }
    }

    /// Records a distance, builder style. See [`insert`](Self::insert).
    pub fn with_distance(mut self, center: impl Into<NodeId>, destination: impl Into<NodeId>, distance: f64) -> Self {
        self.insert(center, destination, distance);
        self
    }

    /// Records the distance between a center and a destination.
    ///
    /// Re-inserting a pair replaces its distance. Negative or non-finite
    /// distances are ignored and `false` is returned.
    pub fn insert(&mut self, center: impl Into<NodeId>, destination: impl Into<NodeId>, distance: f64) -> bool {
        let center = center.into();
        let destination = destination.into();
        if !distance.is_finite() || distance < 0.0 {
            warn!(%center, %destination, distance, "ignoring invalid distance");
            return false;
        }

        let existing = self
            .entries
            .iter_mut()
            .find(|e| e.center == center && e.destination == destination);
        if let Some(entry) = existing {
            entry.distance = distance;
        } else {
            self.entries.push(DistanceEntry {
                center,
                destination,
                distance,
            });
        }
        true
    }

    /// Distribution centers, in canonical order.
    pub fn centers(&self) -> &[NodeId] {
        &self.centers
    }

    /// Destinations, in canonical order.
    pub fn destinations(&self) -> &[NodeId] {
        &self.destinations
    }

    /// All nodes: centers first, then destinations.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.centers.iter().chain(self.destinations.iter())
    }

    /// Recorded entries in insertion order.
    pub fn entries(&self) -> &[DistanceEntry] {
        &self.entries
    }

    /// The recorded center-to-destination distance, if any.
    pub fn distance(&self, center: &str, destination: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.center.as_str() == center && e.destination.as_str() == destination)
            .map(|e| e.distance)
    }

    /// Number of recorded pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pair is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The Brazilian network of five distribution centers and ten
    /// destination cities, with road distances in kilometres.
    pub fn brazilian_network() -> Self {
        const CENTERS: [&str; 5] = ["Belém", "Recife", "Brasília", "São Paulo", "Florianópolis"];
        const DESTINATIONS: [&str; 10] = [
            "Rio de Janeiro",
            "Porto Alegre",
            "Salvador",
            "Manaus",
            "Curitiba",
            "Natal",
            "Goiânia",
            "Fortaleza",
            "Belo Horizonte",
            "Vitória",
        ];
        // One row per center, columns in DESTINATIONS order.
        const KM: [[f64; 10]; 5] = [
            [3200.0, 4000.0, 2100.0, 2500.0, 3800.0, 1900.0, 2000.0, 1600.0, 3000.0, 3100.0],
            [2300.0, 3600.0, 800.0, 4300.0, 3400.0, 300.0, 2400.0, 800.0, 2400.0, 2200.0],
            [1150.0, 2100.0, 1500.0, 3900.0, 1400.0, 2200.0, 210.0, 2200.0, 740.0, 1300.0],
            [450.0, 1100.0, 2000.0, 4300.0, 400.0, 2900.0, 900.0, 3000.0, 590.0, 880.0],
            [1100.0, 470.0, 2500.0, 4600.0, 650.0, 3200.0, 1800.0, 3500.0, 1500.0, 500.0],
        ];

        let mut table = Self::new(CENTERS, DESTINATIONS);
        for (center, row) in CENTERS.iter().zip(KM.iter()) {
            for (destination, &km) in DESTINATIONS.iter().zip(row.iter()) {
                table.insert(*center, *destination, km);
            }
        }
        table
    }
}
