//! Scenario data sources.
//!
//! The allocation and benchmark code never draw random numbers themselves;
//! deliveries and trucks come from a [`ScenarioSource`]. [`RandomScenario`]
//! is the seedable implementation; tests and callers may supply their own.

mod random;

pub use random::{GeneratorConfig, RandomScenario};

use crate::models::{Delivery, NodeId, Truck};
use serde::{Deserialize, Serialize};

/// Scenario sizes as (deliveries, trucks).
pub const STANDARD_SIZES: [(usize, usize); 3] = [(100, 20), (1000, 200), (10000, 2000)];

/// Produces deliveries and trucks for a scenario.
pub trait ScenarioSource {
    /// Generates `count` deliveries to nodes among `destinations`, with ids
    /// `0..count`.
    fn deliveries(&mut self, count: usize, destinations: &[NodeId]) -> Vec<Delivery>;

    /// Generates `count` trucks with ids `0..count`.
    fn trucks(&mut self, count: usize) -> Vec<Truck>;
}

/// A named set of deliveries and trucks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Label, `"{deliveries}x{trucks}"` unless given.
    pub name: String,
    /// Deliveries to allocate.
    pub deliveries: Vec<Delivery>,
    /// Available fleet.
    pub trucks: Vec<Truck>,
}

impl Scenario {
    /// Draws a scenario from `source`.
    pub fn generate<S: ScenarioSource + ?Sized>(
        source: &mut S,
        name: impl Into<String>,
        num_deliveries: usize,
        num_trucks: usize,
        destinations: &[NodeId],
    ) -> Self {
        let deliveries = source.deliveries(num_deliveries, destinations);
        let trucks = source.trucks(num_trucks);
        Self {
            name: name.into(),
            deliveries,
            trucks,
        }
    }

    /// Draws one scenario per entry of [`STANDARD_SIZES`].
    pub fn standard<S: ScenarioSource + ?Sized>(source: &mut S, destinations: &[NodeId]) -> Vec<Self> {
        STANDARD_SIZES
            .iter()
            .map(|&(d, t)| Self::generate(&mut *source, format!("{d}x{t}"), d, t, destinations))
            .collect()
    }
}
