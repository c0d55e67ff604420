//! Simulation observer trait for progress reporting and data collection.

use cts_core::{NodeId, Tick, VehicleId};
use cts_network::RouteError;

use crate::results::RemovalRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The engine itself never prints or
/// logs; observers are the reporting surface.
///
/// # Example — removal printer
///
/// ```rust,ignore
/// struct RemovalPrinter;
///
/// impl SimObserver for RemovalPrinter {
///     fn on_vehicle_removed(&mut self, tick: Tick, record: &RemovalRecord) {
///         println!("{tick}: {} left at {} after {} ticks",
///                  record.vehicle, record.sink, record.transit_ticks);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before generation.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every vehicle a source spawns.
    fn on_vehicle_generated(&mut self, _tick: Tick, _vehicle: VehicleId, _source: NodeId) {}

    /// Called when a source cannot resolve a destination this tick.
    ///
    /// This is the recoverable-warning channel: the tick produces no vehicle
    /// at `source` and the run continues.
    fn on_generation_failed(&mut self, _tick: Tick, _source: NodeId, _err: &RouteError) {}

    /// Called for every vehicle removed at a sink this tick.
    fn on_vehicle_removed(&mut self, _tick: Tick, _record: &RemovalRecord) {}

    /// Called at the end of each tick.  `live` is the number of vehicles
    /// still on the corridor.
    fn on_tick_end(&mut self, _tick: Tick, _live: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
