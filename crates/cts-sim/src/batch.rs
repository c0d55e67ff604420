//! Batch execution of independent scenario × seed runs.
//!
//! Each run owns its corridor, vehicle registry, and RNG streams; runs
//! share only the immutable topology records and route table.  That makes
//! the batch embarrassingly parallel — with the `parallel` feature the
//! specs are distributed over Rayon's thread pool, communicating nothing
//! but their completed [`RunResults`].

use cts_core::{RunConfig, Scenario, DEFAULT_GENERATION_FREQUENCY};
use cts_network::{RouteTable, TopologyRecord};

use crate::observer::NoopObserver;
use crate::results::RunResults;
use crate::{SimBuilder, SimResult};

/// One cell of the experiment grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSpec {
    pub scenario: Scenario,
    pub seed: u64,
}

/// The cartesian product of scenarios and seeds, scenario-major — the
/// classic experiment sweep order.
pub fn sweep(scenarios: &[Scenario], seeds: &[u64]) -> Vec<RunSpec> {
    scenarios
        .iter()
        .flat_map(|&scenario| seeds.iter().map(move |&seed| RunSpec { scenario, seed }))
        .collect()
}

/// Settings shared by every run in a batch.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub total_ticks: u64,
    pub generation_frequency: u64,
}

impl BatchConfig {
    pub fn new(total_ticks: u64) -> BatchConfig {
        BatchConfig {
            total_ticks,
            generation_frequency: DEFAULT_GENERATION_FREQUENCY,
        }
    }
}

/// Execute every spec and return one result set per spec, in spec order.
///
/// `routes` of `None` uses the uniform-to-removers default per run.  The
/// first failing run aborts the batch.
pub fn run_batch(
    records: &[TopologyRecord],
    routes: Option<&RouteTable>,
    batch: &BatchConfig,
    specs: &[RunSpec],
) -> SimResult<Vec<RunResults>> {
    #[cfg(not(feature = "parallel"))]
    {
        specs
            .iter()
            .map(|spec| run_one(records, routes, batch, *spec))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        specs
            .par_iter()
            .map(|spec| run_one(records, routes, batch, *spec))
            .collect()
    }
}

fn run_one(
    records: &[TopologyRecord],
    routes: Option<&RouteTable>,
    batch: &BatchConfig,
    spec: RunSpec,
) -> SimResult<RunResults> {
    let config = RunConfig {
        scenario: spec.scenario,
        seed: spec.seed,
        total_ticks: batch.total_ticks,
        generation_frequency: batch.generation_frequency,
    };

    let mut builder = SimBuilder::new(config, records);
    if let Some(table) = routes {
        builder = builder.routes(table.clone());
    }

    let mut sim = builder.build()?;
    sim.run(&mut NoopObserver)?;
    Ok(sim.results)
}
