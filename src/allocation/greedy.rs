//! Deadline-first greedy allocation.
//!
//! Deliveries are processed most urgent first. Each one goes to the
//! (distribution center, truck) pair with the shortest distance among
//! pairs that satisfy capacity, working hours, and deadline. Nothing is
//! revisited afterwards.
//!
//! # Complexity
//!
//! O(D log D) sorting, O(D·C) oracle queries and O(D·C·T) constraint checks
//! for D deliveries, C centers and T trucks.

use crate::models::{Allocation, Delivery, NodeId, RouteLeg, Truck};
use crate::shortest_path::{DistanceOracle, UNREACHABLE};
use tracing::{debug, trace};

/// Average truck speed in distance units per hour.
pub const AVERAGE_SPEED: f64 = 50.0;

/// Greedy allocator with a configurable average speed.
///
/// # Examples
///
/// ```
/// use u_fleet::allocation::GreedyAllocator;
/// use u_fleet::graph::{DistanceTable, Network};
/// use u_fleet::models::{Delivery, Truck};
/// use u_fleet::shortest_path::Strategy;
///
/// let network = Network::from_table(DistanceTable::brazilian_network());
/// let deliveries = vec![Delivery::new(0, "Goiânia", 200, 24.0).unwrap()];
/// let mut trucks = vec![Truck::new(0, 500, 20.0).unwrap()];
///
/// let allocation = GreedyAllocator::new().allocate(
///     &deliveries,
///     &mut trucks,
///     network.centers(),
///     &network.oracle(Strategy::HeapList),
/// );
/// let leg = &allocation.route(0).unwrap()[0];
/// assert_eq!(leg.origin.as_str(), "Brasília");
/// assert_eq!(trucks[0].capacity(), 300);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyAllocator {
    average_speed: f64,
}

impl GreedyAllocator {
    /// Creates an allocator driving at [`AVERAGE_SPEED`].
    pub fn new() -> Self {
        Self {
            average_speed: AVERAGE_SPEED,
        }
    }

    /// Sets the average speed used to turn distances into travel time.
    ///
    /// Returns `None` unless `speed` is a positive finite number, since any
    /// other value would make travel times negative or undefined.
    pub fn with_average_speed(mut self, speed: f64) -> Option<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return None;
        }
        self.average_speed = speed;
        Some(self)
    }

    /// Average speed in distance units per hour.
    pub fn average_speed(&self) -> f64 {
        self.average_speed
    }

    /// Assigns each delivery to at most one (center, truck) pair.
    ///
    /// Deliveries are sorted by deadline with a stable sort, so equal
    /// deadlines keep their input order. For each delivery, centers are the
    /// outer loop and trucks the inner one; a pair replaces the current best
    /// only with a strictly shorter distance. Chosen trucks lose the
    /// delivery weight and the travel time. Deliveries without a feasible
    /// pair are returned as unallocated.
    pub fn allocate<O>(
        &self,
        deliveries: &[Delivery],
        trucks: &mut [Truck],
        centers: &[NodeId],
        oracle: &O,
    ) -> Allocation
    where
        O: DistanceOracle + ?Sized,
    {
        let mut allocation = Allocation::for_trucks(trucks);

        let mut queue: Vec<&Delivery> = deliveries.iter().collect();
        queue.sort_by(|a, b| a.deadline().total_cmp(&b.deadline()));

        for delivery in queue {
            // (truck index, center, distance)
            let mut best: Option<(usize, &NodeId, f64)> = None;

            for center in centers {
                let distance = oracle.distance(center, delivery.destination());
                if distance == UNREACHABLE {
                    continue;
                }
                let travel_time = distance / self.average_speed;
                if travel_time > delivery.deadline() {
                    continue;
                }

                for (idx, truck) in trucks.iter().enumerate() {
                    if !truck.can_serve(delivery.weight(), travel_time) {
                        continue;
                    }
                    if best.map_or(true, |(_, _, d)| distance < d) {
                        best = Some((idx, center, distance));
                    }
                }
            }

            match best {
                Some((idx, center, distance)) => {
                    let truck = &mut trucks[idx];
                    truck.load(delivery.weight(), distance / self.average_speed);
                    trace!(
                        delivery = delivery.id(),
                        truck = truck.id(),
                        %center,
                        distance,
                        "delivery assigned"
                    );
                    allocation.push_leg(truck.id(), RouteLeg::new(center.clone(), delivery.clone(), distance));
                }
                None => {
                    debug!(
                        delivery = delivery.id(),
                        destination = %delivery.destination(),
                        weight = delivery.weight(),
                        deadline = delivery.deadline(),
                        "no feasible truck"
                    );
                    allocation.push_unallocated(delivery.clone());
                }
            }
        }

        debug!(
            allocated = allocation.num_allocated(),
            unallocated = allocation.num_unallocated(),
            "allocation finished"
        );
        allocation
    }
}

impl Default for GreedyAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs [`GreedyAllocator`] at the default [`AVERAGE_SPEED`].
pub fn allocate<O>(deliveries: &[Delivery], trucks: &mut [Truck], centers: &[NodeId], oracle: &O) -> Allocation
where
    O: DistanceOracle + ?Sized,
{
    GreedyAllocator::new().allocate(deliveries, trucks, centers, oracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DistanceTable, Network, Scale};
    use crate::shortest_path::Strategy;
    use proptest::prelude::*;
    use proptest::strategy::Strategy as _;
    use std::collections::HashMap;

    fn one_center(km: f64) -> Network {
        Network::from_table(DistanceTable::new(["Hub"], ["Town"]).with_distance("Hub", "Town", km))
    }

    fn delivery(id: usize, destination: &str, weight: u32, deadline: f64) -> Delivery {
        Delivery::new(id, destination, weight, deadline).expect("valid delivery")
    }

    fn truck(id: usize, capacity: u32, hours: f64) -> Truck {
        Truck::new(id, capacity, hours).expect("valid truck")
    }

    #[test]
    fn test_travel_time_exceeds_deadline() {
        // 100 km at 50 km/h = 2 h > 1 h deadline
        let network = one_center(100.0);
        let deliveries = vec![delivery(0, "Town", 100, 1.0)];
        let mut trucks = vec![truck(0, 1000, 100.0), truck(1, 1000, 100.0)];

        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        assert_eq!(a.num_allocated(), 0);
        assert_eq!(a.unallocated(), deliveries.as_slice());
        assert_eq!(trucks[0].capacity(), 1000);
    }

    #[test]
    fn test_urgent_delivery_takes_the_only_truck() {
        let network = one_center(100.0);
        // Input order puts the relaxed deadline first.
        let deliveries = vec![delivery(1, "Town", 300, 20.0), delivery(0, "Town", 300, 10.0)];
        let mut trucks = vec![truck(0, 400, 100.0)];

        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::LinearList));
        let route = a.route(0).expect("truck 0");
        assert_eq!(route.len(), 1);
        assert_eq!(route[0].delivery.id(), 0);
        assert_eq!(a.unallocated().len(), 1);
        assert_eq!(a.unallocated()[0].id(), 1);
        assert_eq!(trucks[0].capacity(), 100);
        assert!((trucks[0].hours() - 98.0).abs() < 1e-10);
    }

    #[test]
    fn test_picks_nearest_center() {
        let network = Network::from_table(DistanceTable::brazilian_network());
        let deliveries = vec![delivery(0, "Natal", 100, 72.0)];
        let mut trucks = vec![truck(0, 1000, 50.0)];
        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapMatrix));
        let leg = &a.route(0).expect("truck 0")[0];
        assert_eq!(leg.origin.as_str(), "Recife");
        assert_eq!(leg.distance, 300.0);
        assert!((trucks[0].hours() - 44.0).abs() < 1e-10);
    }

    #[test]
    fn test_ties_go_to_first_truck_and_center() {
        let table = DistanceTable::new(["C1", "C2"], ["D"])
            .with_distance("C1", "D", 100.0)
            .with_distance("C2", "D", 100.0);
        let network = Network::from_table(table);
        let deliveries = vec![delivery(0, "D", 10, 10.0)];
        let mut trucks = vec![truck(7, 100, 10.0), truck(3, 100, 10.0)];

        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        let route = a.route(7).expect("truck 7");
        assert_eq!(route.len(), 1);
        assert_eq!(route[0].origin.as_str(), "C1");
        assert!(a.route(3).expect("truck 3").is_empty());
    }

    #[test]
    fn test_equal_deadlines_keep_input_order() {
        let network = one_center(50.0);
        let deliveries = vec![delivery(5, "Town", 60, 5.0), delivery(2, "Town", 60, 5.0)];
        let mut trucks = vec![truck(0, 100, 10.0)];

        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        assert_eq!(a.route(0).expect("truck 0")[0].delivery.id(), 5);
        assert_eq!(a.unallocated()[0].id(), 2);
    }

    #[test]
    fn test_hours_limit() {
        let network = one_center(250.0); // 5 h
        let deliveries = vec![delivery(0, "Town", 10, 24.0), delivery(1, "Town", 10, 24.0)];
        let mut trucks = vec![truck(0, 1000, 8.0)];

        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        assert_eq!(a.num_allocated(), 1);
        assert_eq!(a.num_unallocated(), 1);
        assert!((trucks[0].hours() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_unreachable_destination() {
        let network = one_center(10.0);
        let deliveries = vec![delivery(0, "Atlantis", 10, 24.0)];
        let mut trucks = vec![truck(0, 1000, 8.0)];
        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::LinearMatrix));
        assert_eq!(a.num_unallocated(), 1);
    }

    #[test]
    fn test_custom_speed() {
        let network = one_center(100.0);
        let deliveries = vec![delivery(0, "Town", 10, 1.0)];
        let mut trucks = vec![truck(0, 100, 10.0)];
        let allocator = GreedyAllocator::new().with_average_speed(100.0).expect("valid speed");
        assert_eq!(allocator.average_speed(), 100.0);
        let a = allocator.allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        assert_eq!(a.num_allocated(), 1);
        assert!((trucks[0].hours() - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_speed_rejected() {
        for speed in [0.0, -50.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(GreedyAllocator::new().with_average_speed(speed).is_none());
        }
        assert!(GreedyAllocator::new().with_average_speed(1e-3).is_some());
    }

    #[test]
    fn test_hours_never_grow() {
        let network = one_center(100.0);
        let deliveries = vec![delivery(0, "Town", 10, 24.0)];
        let mut trucks = vec![truck(0, 100, 10.0)];
        let allocator = GreedyAllocator::new().with_average_speed(-50.0).unwrap_or_default();
        assert_eq!(allocator.average_speed(), AVERAGE_SPEED);

        allocator.allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        assert!(trucks[0].hours() <= trucks[0].initial_hours());
        assert!((trucks[0].hours() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_distance_leg_at_zero_scale() {
        let network = one_center(100.0).scaled(0.0);
        let deliveries = vec![delivery(0, "Town", 10, 1.0)];
        let mut trucks = vec![truck(0, 100, 0.0)];
        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::LinearMatrix));
        assert_eq!(a.num_allocated(), 1);
        assert_eq!(trucks[0].hours(), 0.0);
    }

    #[test]
    fn test_closure_oracle() {
        let oracle = |_: &NodeId, to: &NodeId| if to.as_str() == "Near" { 50.0 } else { UNREACHABLE };
        let centers = vec![NodeId::new("Hub")];
        let deliveries = vec![delivery(0, "Near", 10, 2.0), delivery(1, "Far", 10, 2.0)];
        let mut trucks = vec![truck(0, 100, 10.0)];
        let a = allocate(&deliveries, &mut trucks, &centers, &oracle);
        assert_eq!(a.num_allocated(), 1);
        assert_eq!(a.unallocated()[0].id(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        let network = one_center(10.0);
        let mut trucks: Vec<Truck> = Vec::new();
        let a = allocate(&[], &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        assert_eq!(a.num_allocated(), 0);
        assert!(a.routes().is_empty());

        let deliveries = vec![delivery(0, "Town", 10, 24.0)];
        let a = allocate(&deliveries, &mut trucks, network.centers(), &network.oracle(Strategy::HeapList));
        assert_eq!(a.num_unallocated(), 1);
    }

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

    fn fleet_strategy() -> impl proptest::strategy::Strategy<Value = (Vec<Delivery>, Vec<Truck>)> {
        let deliveries = prop::collection::vec((0usize..10, 50u32..=500, 12u32..=72), 0..40).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(id, (d, w, h))| delivery(id, DESTINATIONS[d], w, f64::from(h)))
                .collect::<Vec<_>>()
        });
        let trucks = prop::collection::vec((500u32..=1500, 10u32..=50), 0..8).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(id, (c, h))| truck(id, c, f64::from(h)))
                .collect::<Vec<_>>()
        });
        (deliveries, trucks)
    }

    proptest! {
        #[test]
        fn prop_capacity_and_hours_respected((deliveries, trucks) in fleet_strategy()) {
            let network = Network::from_table(DistanceTable::brazilian_network());
            let mut fleet = trucks.clone();
            let a = allocate(&deliveries, &mut fleet, network.centers(), &network.oracle(Strategy::HeapList));

            for original in &trucks {
                let legs = a.route(original.id()).expect("every truck has a route");
                let weight: u32 = legs.iter().map(|l| l.delivery.weight()).sum();
                let hours: f64 = legs.iter().map(|l| l.travel_time(AVERAGE_SPEED)).sum();
                prop_assert!(weight <= original.capacity());
                prop_assert!(hours <= original.hours() + 1e-9);
                for leg in legs {
                    prop_assert!(leg.travel_time(AVERAGE_SPEED) <= leg.delivery.deadline());
                }

                let after = fleet.iter().find(|t| t.id() == original.id()).expect("same fleet");
                prop_assert_eq!(after.capacity(), original.capacity() - weight);
                prop_assert!((after.hours() - (original.hours() - hours)).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_every_delivery_accounted_once((deliveries, trucks) in fleet_strategy()) {
            let network = Network::from_table(DistanceTable::brazilian_network());
            let mut fleet = trucks;
            let a = allocate(&deliveries, &mut fleet, network.centers(), &network.oracle(Strategy::LinearList));

            let mut seen: HashMap<usize, usize> = HashMap::new();
            for leg in a.routes().values().flatten() {
                *seen.entry(leg.delivery.id()).or_default() += 1;
            }
            for d in a.unallocated() {
                *seen.entry(d.id()).or_default() += 1;
            }
            prop_assert_eq!(seen.len(), deliveries.len());
            prop_assert!(seen.values().all(|&count| count == 1));
        }

        #[test]
        fn prop_frontier_choice_does_not_change_allocation((deliveries, trucks) in fleet_strategy()) {
            let network = Network::from_table(DistanceTable::brazilian_network());
            let run = |strategy: Strategy| {
                let mut fleet = trucks.clone();
                allocate(&deliveries, &mut fleet, network.centers(), &network.oracle(strategy))
            };
            prop_assert_eq!(run(Strategy::LinearList), run(Strategy::HeapList));
            prop_assert_eq!(run(Strategy::LinearMatrix), run(Strategy::HeapMatrix));
        }
    }
}
