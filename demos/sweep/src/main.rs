//! sweep — the full scenario × seed experiment grid.
//!
//! Runs all nine bridge-delay scenarios over ten replication seeds (90
//! independent runs of five simulated days each), in parallel, and collects
//! every removal into one `removals.csv` keyed by scenario and seed.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use cts_core::Scenario;
use cts_network::load_corridor_reader;
use cts_output::{write_run_results, CsvWriter, OutputWriter};
use cts_sim::{run_batch, sweep, BatchConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS: u64 = 5 * 24 * 60;

/// Ten replication seeds per scenario.
const SEEDS: [u64; 10] = [
    1234567, 1234568, 1234569, 1234560, 1234561, 1234562, 1234563, 1234564, 1234565, 1234566,
];

// ── Topology CSV ──────────────────────────────────────────────────────────────

// Same condensed N1 corridor as the `single` demo.
const TOPOLOGY_CSV: &str = "\
id,road,model_type,name,lat,lon,length,condition\n\
0,N1,sourcesink,Jessore end,23.17,89.21,0,\n\
1,N1,link,approach west,23.18,89.24,6000,\n\
2,N1,bridge,Kaliganga bridge,23.19,89.28,180,A\n\
3,N1,link,mid section west,23.20,89.33,7000,\n\
4,N1,bridge,Chitra bridge,23.21,89.37,45,C\n\
5,N1,link,mid section east,23.22,89.42,6500,\n\
6,N1,bridge,Bhairab bridge,23.23,89.46,250,D\n\
7,N1,link,approach east,23.24,89.51,5500,\n\
8,N1,link,town bypass,23.25,89.54,1200,\n\
9,N1,sourcesink,Narail end,23.26,89.56,0,\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let specs = sweep(&Scenario::ALL, &SEEDS);
    println!("=== sweep — corridor traffic experiment grid ===");
    println!(
        "{} scenarios × {} seeds = {} runs of {TOTAL_TICKS} ticks",
        Scenario::ALL.len(),
        SEEDS.len(),
        specs.len()
    );
    println!();

    let records = load_corridor_reader(Cursor::new(TOPOLOGY_CSV))?;
    let batch = BatchConfig::new(TOTAL_TICKS);

    let t0 = Instant::now();
    let results = run_batch(&records, None, &batch, &specs)?;
    let elapsed = t0.elapsed();
    println!("All runs complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    // One removals file for the whole grid, keyed by (scenario, seed).
    std::fs::create_dir_all("output/sweep")?;
    let mut writer = CsvWriter::new(Path::new("output/sweep"))?;
    for run in &results {
        write_run_results(&mut writer, run)?;
    }
    writer.finish()?;

    // Per-scenario aggregates over the ten seeds.
    println!("{:<10} {:<10} {:<14}", "Scenario", "Removed", "Mean transit");
    println!("{}", "-".repeat(36));
    for scenario in Scenario::ALL {
        let runs: Vec<_> = results.iter().filter(|r| r.scenario == scenario).collect();
        let removed: usize = runs.iter().map(|r| r.len()).sum();
        let transit: u64 = runs
            .iter()
            .flat_map(|r| r.records.iter())
            .map(|rec| rec.transit_ticks)
            .sum();
        let mean = if removed == 0 { 0.0 } else { transit as f64 / removed as f64 };
        println!("{:<10} {:<10} {:<14.1}", scenario.as_u8(), removed, mean);
    }

    Ok(())
}
