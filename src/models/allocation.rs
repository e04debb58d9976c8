//! Allocation result type.

use super::{Delivery, ItineraryStop, RouteLeg, Truck};
use crate::shortest_path::DistanceOracle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The outcome of assigning deliveries to trucks.
///
/// Every truck passed to the allocator has an entry in [`routes`](Self::routes),
/// possibly empty. Legs are kept in assignment order, which is not
/// necessarily a geographic chain.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{Allocation, Truck};
///
/// let trucks = vec![Truck::new(0, 500, 10.0).unwrap()];
/// let allocation = Allocation::for_trucks(&trucks);
/// assert_eq!(allocation.route(0).map(|r| r.len()), Some(0));
/// assert_eq!(allocation.num_unallocated(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    routes: BTreeMap<usize, Vec<RouteLeg>>,
    unallocated: Vec<Delivery>,
}

impl Allocation {
    /// Creates an empty allocation with one empty route per truck.
    pub fn for_trucks(trucks: &[Truck]) -> Self {
        Self {
            routes: trucks.iter().map(|t| (t.id(), Vec::new())).collect(),
            unallocated: Vec::new(),
        }
    }

    /// Appends a leg to the given truck's route.
    pub fn push_leg(&mut self, truck_id: usize, leg: RouteLeg) {
        self.routes.entry(truck_id).or_default().push(leg);
    }

    /// Records a delivery that no truck could take.
    pub fn push_unallocated(&mut self, delivery: Delivery) {
        self.unallocated.push(delivery);
    }

    /// Routes keyed by truck ID.
    pub fn routes(&self) -> &BTreeMap<usize, Vec<RouteLeg>> {
        &self.routes
    }

    /// The legs assigned to one truck, or `None` for an unknown truck ID.
    pub fn route(&self, truck_id: usize) -> Option<&[RouteLeg]> {
        self.routes.get(&truck_id).map(Vec::as_slice)
    }

    /// Deliveries that were not assigned.
    pub fn unallocated(&self) -> &[Delivery] {
        &self.unallocated
    }

    /// Number of assigned deliveries across all trucks.
    pub fn num_allocated(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Number of unassigned deliveries.
    pub fn num_unallocated(&self) -> usize {
        self.unallocated.len()
    }

    /// Sum of leg distances across all trucks.
    pub fn total_distance(&self) -> f64 {
        self.routes.values().flatten().map(|leg| leg.distance).sum()
    }

    /// Builds the chained itinerary of one truck.
    ///
    /// The first stop departs from its distribution center with the
    /// allocated distance. Each later stop departs from the previous
    /// destination, and its distance is queried from `oracle`.
    pub fn itinerary<O>(&self, truck_id: usize, oracle: &O) -> Vec<ItineraryStop>
    where
        O: DistanceOracle + ?Sized,
    {
        let Some(legs) = self.routes.get(&truck_id) else {
            return Vec::new();
        };

        let mut stops = Vec::with_capacity(legs.len());
        let mut previous: Option<&RouteLeg> = None;
        for leg in legs {
            let stop = match previous {
                None => ItineraryStop {
                    origin: leg.origin.clone(),
                    destination: leg.destination().clone(),
                    distance: leg.distance,
                    chained: false,
                },
                Some(prev) => ItineraryStop {
                    origin: prev.destination().clone(),
                    destination: leg.destination().clone(),
                    distance: oracle.distance(prev.destination(), leg.destination()),
                    chained: true,
                },
            };
            stops.push(stop);
            previous = Some(leg);
        }
        stops
    }
}
