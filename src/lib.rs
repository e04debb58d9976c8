//! # u-fleet
//!
//! Delivery allocation for a truck fleet over a road network, with
//! interchangeable shortest-path strategies and a parallel benchmark
//! comparing them.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (NodeId, Delivery, Truck, RouteLeg, Allocation)
//! - [`graph`] — Distance table, adjacency list and adjacency matrix, scaling
//! - [`shortest_path`] — Dijkstra with heap or linear-scan frontier, strategy selection
//! - [`allocation`] — Deadline-first greedy allocation
//! - [`benchmark`] — Time and peak memory per strategy and scale factor
//! - [`generator`] — Seedable scenario data sources
//! - [`validation`] — Input checks for externally loaded fleets
//! - [`logging`] — `tracing` subscriber setup

pub mod allocation;
pub mod benchmark;
pub mod generator;
pub mod graph;
pub mod logging;
pub mod models;
pub mod shortest_path;
pub mod validation;
