//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `removals` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, RemovalRow, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS removals (
                 scenario      INTEGER NOT NULL,
                 seed          INTEGER NOT NULL,
                 tick          INTEGER NOT NULL,
                 sink          INTEGER NOT NULL,
                 vehicle       INTEGER NOT NULL,
                 generated_at  INTEGER NOT NULL,
                 transit_ticks INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 scenario      INTEGER NOT NULL,
                 seed          INTEGER NOT NULL,
                 tick          INTEGER NOT NULL,
                 live_vehicles INTEGER NOT NULL,
                 removed       INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_removals(&mut self, rows: &[RemovalRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO removals \
                 (scenario, seed, tick, sink, vehicle, generated_at, transit_ticks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.scenario,
                    row.seed as i64,
                    row.tick as i64,
                    row.sink,
                    row.vehicle as i64,
                    row.generated_at as i64,
                    row.transit_ticks as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (scenario, seed, tick, live_vehicles, removed) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.scenario,
                row.seed as i64,
                row.tick as i64,
                row.live_vehicles as i64,
                row.removed as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
