//! `cts-output` — simulation output writers for the corridor traffic
//! simulation.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                          |
//! |-----------|---------|----------------------------------------|
//! | *(none)*  | CSV     | `removals.csv`, `tick_summaries.csv`   |
//! | `sqlite`  | SQLite  | `output.db`                            |
//!
//! All backends implement [`OutputWriter`] and can be driven either live, by
//! [`SimOutputObserver`] (which implements `cts_sim::SimObserver`), or after
//! the fact with [`write_run_results`] on a batch's collected `RunResults`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cts_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RemovalRow, TickSummaryRow};
pub use writer::{write_run_results, OutputWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
