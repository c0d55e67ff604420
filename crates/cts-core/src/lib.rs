//! `cts-core` — foundational types for the corridor traffic simulation.
//!
//! This crate is a dependency of every other `cts-*` crate.  It intentionally
//! has no `cts-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `VehicleId`                                  |
//! | [`geo`]      | `GeoPoint`                                             |
//! | [`time`]     | `Tick`, `RunConfig`                                    |
//! | [`scenario`] | `Scenario`, `Condition`, the delay-threshold table     |
//! | [`rng`]      | `BridgeRng`, `TickRng`, `RunRng` (seeded streams)      |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod scenario;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{NodeId, VehicleId};
pub use rng::{BridgeRng, RunRng, TickRng};
pub use scenario::{Condition, Scenario, ScenarioError};
pub use time::{RunConfig, Tick, DEFAULT_GENERATION_FREQUENCY};
