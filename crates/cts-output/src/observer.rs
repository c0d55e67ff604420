//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cts_core::{RunConfig, Tick};
use cts_sim::{RemovalRecord, SimObserver};

use crate::row::{RemovalRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes removal rows and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// Removals are buffered within a tick and flushed as one batch at tick end,
/// together with the summary row.  Errors from the writer are stored
/// internally because `SimObserver` methods have no return value.  After
/// `sim.run()` returns, check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    scenario:   u8,
    seed:       u64,
    pending:    Vec<RemovalRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, stamping rows with the run key
    /// from `config`.
    pub fn new(writer: W, config: &RunConfig) -> Self {
        Self {
            writer,
            scenario:   config.scenario.as_u8(),
            seed:       config.seed,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_vehicle_removed(&mut self, _tick: Tick, record: &RemovalRecord) {
        self.pending.push(RemovalRow {
            scenario:      self.scenario,
            seed:          self.seed,
            tick:          record.tick.0,
            sink:          record.sink.0,
            vehicle:       record.vehicle.0,
            generated_at:  record.generated_at.0,
            transit_ticks: record.transit_ticks,
        });
    }

    fn on_tick_end(&mut self, tick: Tick, live: usize) {
        let removed = self.pending.len() as u64;
        if removed > 0 {
            let result = self.writer.write_removals(&self.pending);
            self.store_err(result);
            self.pending.clear();
        }

        let row = TickSummaryRow {
            scenario:      self.scenario,
            seed:          self.seed,
            tick:          tick.0,
            live_vehicles: live as u64,
            removed,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
