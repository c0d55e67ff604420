//! Plain data row types written by output backends.
//!
//! Every row carries the `(scenario, seed)` run key, so rows from an entire
//! experiment sweep can land in one file and still be grouped afterwards.

use cts_core::Scenario;
use cts_sim::RemovalRecord;

/// One vehicle removal, flattened for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalRow {
    pub scenario:      u8,
    pub seed:          u64,
    pub tick:          u64,
    pub sink:          u32,
    pub vehicle:       u64,
    pub generated_at:  u64,
    pub transit_ticks: u64,
}

impl RemovalRow {
    pub fn from_record(scenario: Scenario, seed: u64, record: &RemovalRecord) -> RemovalRow {
        RemovalRow {
            scenario:      scenario.as_u8(),
            seed,
            tick:          record.tick.0,
            sink:          record.sink.0,
            vehicle:       record.vehicle.0,
            generated_at:  record.generated_at.0,
            transit_ticks: record.transit_ticks,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub scenario:      u8,
    pub seed:          u64,
    pub tick:          u64,
    /// Vehicles on the corridor at tick end.
    pub live_vehicles: u64,
    /// Vehicles removed during this tick.
    pub removed:       u64,
}
