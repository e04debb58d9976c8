//! Route leg and itinerary stop types.

use super::{Delivery, NodeId};
use serde::{Deserialize, Serialize};

/// One delivery transported by a truck from a distribution center.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{Delivery, NodeId, RouteLeg};
///
/// let delivery = Delivery::new(0, "Curitiba", 200, 24.0).unwrap();
/// let leg = RouteLeg::new(NodeId::new("São Paulo"), delivery, 400.0);
/// assert_eq!(leg.destination().as_str(), "Curitiba");
/// assert!((leg.travel_time(50.0) - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Distribution center the truck departs from.
    pub origin: NodeId,
    /// Delivery carried on this leg.
    pub delivery: Delivery,
    /// Shortest-path distance from origin to destination.
    pub distance: f64,
}

impl RouteLeg {
    /// Creates a leg.
    pub fn new(origin: NodeId, delivery: Delivery, distance: f64) -> Self {
        Self {
            origin,
            delivery,
            distance,
        }
    }

    /// Destination of the carried delivery.
    pub fn destination(&self) -> &NodeId {
        self.delivery.destination()
    }

    /// Hours needed to drive this leg at the given average speed.
    pub fn travel_time(&self, speed: f64) -> f64 {
        self.distance / speed
    }
}

/// A stop in a truck's chained itinerary.
///
/// The first stop of an itinerary departs from its distribution center.
/// Later stops are `chained`: they depart from the previous stop's
/// destination rather than going back to a center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryStop {
    /// Departure node.
    pub origin: NodeId,
    /// Arrival node.
    pub destination: NodeId,
    /// Distance between origin and destination.
    pub distance: f64,
    /// `true` if the stop departs from the previous destination.
    pub chained: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leg_destination() {
        let delivery = Delivery::new(1, "Natal", 50, 12.0).expect("valid");
        let leg = RouteLeg::new(NodeId::new("Recife"), delivery, 300.0);
        assert_eq!(leg.destination(), &NodeId::new("Natal"));
        assert_eq!(leg.origin, NodeId::new("Recife"));
        assert!((leg.travel_time(50.0) - 6.0).abs() < 1e-10);
    }
}
