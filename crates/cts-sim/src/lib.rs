//! `cts-sim` — the tick loop orchestrator for the corridor traffic simulation.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Generate — every generating node, in corridor order, spawns one
//!                vehicle on generation ticks (tick % frequency == 0).
//!   ② Move     — every live vehicle, in creation (id) order, waits or
//!                drives.  The id snapshot is taken after ①, so vehicles
//!                move in the tick they are generated.  Vehicles reaching a
//!                removing node leave the live set and are reported.
//!   ③ Age      — sink buffers that saw no removal this tick are cleared,
//!                so at tick end every buffer holds only this tick's
//!                removals.
//! ```
//!
//! Execution is single-threaded and strictly ordered within a run; the only
//! parallelism is across independent runs (see [`batch`], feature
//! `parallel`).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `run_batch` distributes runs over Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cts_core::{RunConfig, Scenario};
//! use cts_network::load_corridor_csv;
//! use cts_sim::{NoopObserver, SimBuilder};
//!
//! let records = load_corridor_csv(Path::new("n1.csv"))?;
//! let config = RunConfig::new(Scenario::new(5)?, 1234567, 7200);
//! let mut sim = SimBuilder::new(config, &records).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} vehicles removed", sim.results.len());
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod results;
pub mod sim;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use batch::{run_batch, sweep, BatchConfig, RunSpec};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use results::{RemovalRecord, RunResults};
pub use sim::Sim;
pub use vehicle::{Vehicle, VehicleState, SPEED_M_PER_TICK};
