//! Domain model types for fleet delivery allocation.
//!
//! Provides node identifiers, deliveries with weights and deadlines, trucks
//! with remaining capacity and hours, route legs, and the allocation result
//! that ties them together.

mod allocation;
mod delivery;
mod node;
mod route;
mod truck;

pub use allocation::Allocation;
pub use delivery::Delivery;
pub use node::NodeId;
pub use route::{ItineraryStop, RouteLeg};
pub use truck::Truck;
