//! Seedable random scenarios.

use super::ScenarioSource;
use crate::models::{Delivery, NodeId, Truck};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Inclusive ranges the random values are drawn from.
///
/// Bounds may be given in either order. Weights and deadlines below 1 are
/// raised to 1 so every generated delivery is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Delivery weight range.
    pub weight: (u32, u32),
    /// Delivery deadline range, whole hours.
    pub deadline: (u32, u32),
    /// Truck capacity range.
    pub capacity: (u32, u32),
    /// Truck working-hours range, whole hours.
    pub hours: (u32, u32),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            weight: (50, 500),
            deadline: (12, 72),
            capacity: (500, 1500),
            hours: (10, 50),
        }
    }
}

fn draw<R: Rng>(rng: &mut R, (a, b): (u32, u32), floor: u32) -> u32 {
    let lo = a.min(b).max(floor);
    let hi = a.max(b).max(lo);
    rng.random_range(lo..=hi)
}

/// A [`ScenarioSource`] drawing uniformly from a [`GeneratorConfig`].
///
/// The same seed always produces the same scenario.
///
/// # Examples
///
/// ```
/// use u_fleet::generator::{RandomScenario, ScenarioSource};
/// use u_fleet::graph::DistanceTable;
///
/// let table = DistanceTable::brazilian_network();
/// let a = RandomScenario::seeded(7).deliveries(5, table.destinations());
/// let b = RandomScenario::seeded(7).deliveries(5, table.destinations());
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct RandomScenario {
    rng: StdRng,
    config: GeneratorConfig,
}

impl RandomScenario {
    /// Creates a generator with the default ranges.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the value ranges.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// The value ranges in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl ScenarioSource for RandomScenario {
    fn deliveries(&mut self, count: usize, destinations: &[NodeId]) -> Vec<Delivery> {
        if destinations.is_empty() {
            return Vec::new();
        }
        (0..count)
            .filter_map(|id| {
                let destination = destinations.choose(&mut self.rng)?.clone();
                let weight = draw(&mut self.rng, self.config.weight, 1);
                let deadline = draw(&mut self.rng, self.config.deadline, 1);
                Delivery::new(id, destination, weight, f64::from(deadline))
            })
            .collect()
    }

    fn trucks(&mut self, count: usize) -> Vec<Truck> {
        (0..count)
            .filter_map(|id| {
                let capacity = draw(&mut self.rng, self.config.capacity, 0);
                let hours = draw(&mut self.rng, self.config.hours, 0);
                Truck::new(id, capacity, f64::from(hours))
            })
            .collect()
    }
}
