//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `removals.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RemovalRow, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    removals:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut removals = Writer::from_path(dir.join("removals.csv"))?;
        removals.write_record([
            "scenario",
            "seed",
            "tick",
            "sink",
            "vehicle",
            "generated_at",
            "transit_ticks",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["scenario", "seed", "tick", "live_vehicles", "removed"])?;

        Ok(Self {
            removals,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_removals(&mut self, rows: &[RemovalRow]) -> OutputResult<()> {
        for row in rows {
            self.removals.write_record(&[
                row.scenario.to_string(),
                row.seed.to_string(),
                row.tick.to_string(),
                row.sink.to_string(),
                row.vehicle.to_string(),
                row.generated_at.to_string(),
                row.transit_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.scenario.to_string(),
            row.seed.to_string(),
            row.tick.to_string(),
            row.live_vehicles.to_string(),
            row.removed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.removals.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
