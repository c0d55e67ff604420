//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use cts_core::{RunConfig, RunRng, Tick};
use cts_network::{Corridor, RouteTable, TopologyRecord};

use crate::results::RunResults;
use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`RunConfig`] — scenario, seed, run length, generation cadence.
/// - Topology records — the corridor is built *here*, from the config's
///   scenario and seed, so bridge states can never disagree with the run
///   they belong to.
///
/// # Optional inputs
///
/// | Method        | Default                                            |
/// |---------------|----------------------------------------------------|
/// | `.routes(t)`  | [`RouteTable::uniform_to_removers`]                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, &records)
///     .routes(table)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'a> {
    config: RunConfig,
    records: &'a [TopologyRecord],
    routes: Option<RouteTable>,
}

impl<'a> SimBuilder<'a> {
    pub fn new(config: RunConfig, records: &'a [TopologyRecord]) -> SimBuilder<'a> {
        SimBuilder { config, records, routes: None }
    }

    /// Supply a custom route table.  It is validated against the corridor
    /// during `build`.
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Validate everything and return a ready-to-run [`Sim`] at tick 0.
    ///
    /// All configuration errors surface here, before the first tick — a
    /// `Sim` that builds cannot hit a topology or route problem mid-run.
    pub fn build(self) -> SimResult<Sim> {
        if self.config.generation_frequency == 0 {
            return Err(SimError::Config(
                "generation_frequency must be at least 1".to_owned(),
            ));
        }

        let corridor = Corridor::build(self.records, self.config.scenario, self.config.seed)?;
        let routes = self
            .routes
            .unwrap_or_else(|| RouteTable::uniform_to_removers(&corridor));
        routes.validate(&corridor)?;

        let results = RunResults::new(self.config.scenario, self.config.seed);
        let route_rng = RunRng::new(self.config.seed);

        Ok(Sim {
            config: self.config,
            now: Tick::ZERO,
            corridor,
            routes,
            vehicles: BTreeMap::new(),
            results,
            next_vehicle_id: 0,
            route_rng,
        })
    }
}
