//! Per-run result collection.

use cts_core::{NodeId, Scenario, Tick, VehicleId};

/// One removal: a vehicle leaving the corridor at a sink.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RemovalRecord {
    pub tick: Tick,
    pub sink: NodeId,
    pub vehicle: VehicleId,
    pub generated_at: Tick,
    /// Ticks between generation and removal.
    pub transit_ticks: u64,
}

/// The complete externally visible output of one run: the run key plus all
/// removal records in removal order (by tick, then by vehicle id within a
/// tick — the deterministic stepping order).
#[derive(Clone, PartialEq, Debug)]
pub struct RunResults {
    pub scenario: Scenario,
    pub seed: u64,
    pub records: Vec<RemovalRecord>,
}

impl RunResults {
    pub fn new(scenario: Scenario, seed: u64) -> RunResults {
        RunResults { scenario, seed, records: Vec::new() }
    }

    pub fn push(&mut self, record: RemovalRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from one tick.
    pub fn at_tick(&self, tick: Tick) -> impl Iterator<Item = &RemovalRecord> {
        self.records.iter().filter(move |r| r.tick == tick)
    }

    /// Records from one sink.
    pub fn at_sink(&self, sink: NodeId) -> impl Iterator<Item = &RemovalRecord> {
        self.records.iter().filter(move |r| r.sink == sink)
    }

    /// Mean transit time in ticks, or `None` if nothing was removed.
    pub fn mean_transit_ticks(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: u64 = self.records.iter().map(|r| r.transit_ticks).sum();
        Some(total as f64 / self.records.len() as f64)
    }
}
