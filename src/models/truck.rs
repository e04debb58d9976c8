//! Truck type with remaining capacity and working hours.

use serde::{Deserialize, Serialize};

/// A truck that carries deliveries out of distribution centers.
///
/// Remaining capacity and hours only ever decrease, and only through the
/// allocation engine. The initial values are kept so the used share can be
/// reported afterwards.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Truck;
///
/// let t = Truck::new(0, 1000, 40.0).unwrap();
/// assert_eq!(t.id(), 0);
/// assert_eq!(t.capacity(), 1000);
/// assert!(t.can_serve(500, 10.0));
/// assert!(!t.can_serve(1500, 10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    id: usize,
    capacity: u32,
    hours: f64,
    initial_capacity: u32,
    initial_hours: f64,
}

impl Truck {
    /// Creates a truck with the given capacity and available hours.
    ///
    /// Returns `None` if `hours` is negative or not finite.
    pub fn new(id: usize, capacity: u32, hours: f64) -> Option<Self> {
        if !hours.is_finite() || hours < 0.0 {
            return None;
        }
        Some(Self {
            id,
            capacity,
            hours,
            initial_capacity: capacity,
            initial_hours: hours,
        })
    }

    /// Truck ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Remaining load capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Remaining working hours.
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Capacity the truck started with.
    pub fn initial_capacity(&self) -> u32 {
        self.initial_capacity
    }

    /// Working hours the truck started with.
    pub fn initial_hours(&self) -> f64 {
        self.initial_hours
    }

    /// Capacity consumed by assigned deliveries.
    pub fn used_capacity(&self) -> u32 {
        self.initial_capacity.saturating_sub(self.capacity)
    }

    /// Hours consumed by assigned legs.
    pub fn used_hours(&self) -> f64 {
        self.initial_hours - self.hours
    }

    /// Returns `true` if the truck still has room for `weight` and time for
    /// a leg of `travel_time` hours.
    pub fn can_serve(&self, weight: u32, travel_time: f64) -> bool {
        self.capacity >= weight && self.hours >= travel_time
    }

    /// Consumes capacity and hours for an assigned leg.
    pub(crate) fn load(&mut self, weight: u32, travel_time: f64) {
        debug_assert!(self.can_serve(weight, travel_time));
        self.capacity -= weight;
        self.hours -= travel_time;
    }
}
