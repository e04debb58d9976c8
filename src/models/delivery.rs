//! Delivery job type.

use super::NodeId;
use serde::{Deserialize, Serialize};

/// A delivery job: a load that must reach a destination before a deadline.
///
/// Deliveries are immutable once created.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Delivery;
///
/// let d = Delivery::new(0, "Salvador", 120, 24.0).unwrap();
/// assert_eq!(d.destination().as_str(), "Salvador");
/// assert_eq!(d.weight(), 120);
/// assert!(Delivery::new(1, "Salvador", 0, 24.0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    id: usize,
    destination: NodeId,
    weight: u32,
    deadline: f64,
}

impl Delivery {
    /// Creates a new delivery.
    ///
    /// Returns `None` if `weight` is zero or `deadline` is not a positive
    /// finite number of hours.
    pub fn new(id: usize, destination: impl Into<NodeId>, weight: u32, deadline: f64) -> Option<Self> {
        if weight == 0 || !deadline.is_finite() || deadline <= 0.0 {
            return None;
        }
        Some(Self {
            id,
            destination: destination.into(),
            weight,
            deadline,
        })
    }

    /// Caller-assigned delivery ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Destination node.
    pub fn destination(&self) -> &NodeId {
        &self.destination
    }

    /// Load weight in mass units.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Latest acceptable travel time, in hours.
    pub fn deadline(&self) -> f64 {
        self.deadline
    }
}
