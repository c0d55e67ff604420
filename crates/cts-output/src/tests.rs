//! Integration tests for cts-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{RemovalRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn removal_row(vehicle: u64, tick: u64) -> RemovalRow {
        RemovalRow {
            scenario:      4,
            seed:          1234567,
            tick,
            sink:          2,
            vehicle,
            generated_at:  tick,
            transit_ticks: 0,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            scenario:      4,
            seed:          1234567,
            tick,
            live_vehicles: tick,
            removed:       1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("removals.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("removals.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["scenario", "seed", "tick", "sink", "vehicle", "generated_at", "transit_ticks"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["scenario", "seed", "tick", "live_vehicles", "removed"]);
    }

    #[test]
    fn csv_removal_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![removal_row(0, 5), removal_row(1, 5), removal_row(2, 10)];
        w.write_removals(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("removals.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "4"); // scenario
        assert_eq!(&read_rows[0][2], "5"); // tick
        assert_eq!(&read_rows[1][4], "1"); // vehicle
        assert_eq!(&read_rows[2][2], "10");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][1], "1234567"); // seed
        assert_eq!(&read_rows[0][2], "3");       // tick
        assert_eq!(&read_rows[0][3], "3");       // live_vehicles
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_removals_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_removals(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn write_run_results_dumps_all_records() {
        use cts_core::{NodeId, Scenario, Tick, VehicleId};
        use cts_sim::{RemovalRecord, RunResults};

        use crate::writer::write_run_results;

        let mut results = RunResults::new(Scenario::new(3).unwrap(), 99);
        results.push(RemovalRecord {
            tick:          Tick(10),
            sink:          NodeId(2),
            vehicle:       VehicleId(0),
            generated_at:  Tick(5),
            transit_ticks: 5,
        });
        results.push(RemovalRecord {
            tick:          Tick(12),
            sink:          NodeId(2),
            vehicle:       VehicleId(1),
            generated_at:  Tick(10),
            transit_ticks: 2,
        });

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_run_results(&mut w, &results).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("removals.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");  // scenario
        assert_eq!(&rows[0][1], "99"); // seed
        assert_eq!(&rows[1][6], "2");  // transit_ticks
    }

    #[test]
    fn integration_csv() {
        use cts_core::{RunConfig, Scenario};
        use cts_network::{ModelType, TopologyRecord};
        use cts_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let records = vec![
            TopologyRecord {
                id: 0,
                road: "N1".to_owned(),
                model_type: ModelType::Source,
                name: "start".to_owned(),
                lat: 23.7,
                lon: 90.4,
                length: 0.0,
                condition: None,
            },
            TopologyRecord {
                id: 1,
                road: "N1".to_owned(),
                model_type: ModelType::Link,
                name: "link".to_owned(),
                lat: 23.71,
                lon: 90.41,
                length: 500.0,
                condition: None,
            },
            TopologyRecord {
                id: 2,
                road: "N1".to_owned(),
                model_type: ModelType::Sink,
                name: "end".to_owned(),
                lat: 23.72,
                lon: 90.42,
                length: 0.0,
                condition: None,
            },
        ];

        let config = RunConfig::new(Scenario::new(0).unwrap(), 1, 10);
        let mut sim = SimBuilder::new(config.clone(), &records).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // 500 m corridor: every vehicle is removed in its generation tick, so
        // the generation ticks 0 and 5 each produce one removal row.
        let mut rdr = csv::Reader::from_path(dir.path().join("removals.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2, "expected 2 removal rows, got {}", rows.len());
        assert_eq!(&rows[0][2], "0"); // tick
        assert_eq!(&rows[1][2], "5");

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 10, "one summary row per tick");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{RemovalRow, TickSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_removal_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            RemovalRow { scenario: 1, seed: 7, tick: 3, sink: 4, vehicle: 0, generated_at: 0, transit_ticks: 3 },
            RemovalRow { scenario: 1, seed: 7, tick: 3, sink: 4, vehicle: 1, generated_at: 0, transit_ticks: 3 },
            RemovalRow { scenario: 1, seed: 7, tick: 8, sink: 4, vehicle: 2, generated_at: 5, transit_ticks: 3 },
        ];
        w.write_removals(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM removals", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_large_seed_stored() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_removals(&[RemovalRow {
            scenario: 8,
            seed: 1234567,
            tick: 0,
            sink: 2,
            vehicle: 0,
            generated_at: 0,
            transit_ticks: 0,
        }])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let seed: i64 = conn
            .query_row("SELECT seed FROM removals WHERE vehicle = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(seed, 1234567);
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            scenario:      5,
            seed:          42,
            tick:          7,
            live_vehicles: 12,
            removed:       2,
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (live, removed): (i64, i64) = conn
            .query_row(
                "SELECT live_vehicles, removed FROM tick_summaries WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(live, 12);
        assert_eq!(removed, 2);
    }
}
