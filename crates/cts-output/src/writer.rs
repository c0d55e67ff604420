//! The `OutputWriter` trait implemented by all backend writers.

use cts_sim::RunResults;

use crate::{OutputResult, RemovalRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of removal rows.
    fn write_removals(&mut self, rows: &[RemovalRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Dump a completed run's removal records into `writer`.
///
/// For runs driven by [`run_batch`][cts_sim::run_batch], which collect their
/// results in memory rather than streaming them through an observer.  Does
/// not call `finish`, so results from many runs can share one writer.
pub fn write_run_results<W: OutputWriter>(writer: &mut W, results: &RunResults) -> OutputResult<()> {
    let rows: Vec<RemovalRow> = results
        .records
        .iter()
        .map(|r| RemovalRow::from_record(results.scenario, results.seed, r))
        .collect();
    writer.write_removals(&rows)
}
