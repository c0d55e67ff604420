//! Per-source destination weights and path drawing.

use rustc_hash::FxHashMap;

use cts_core::{NodeId, RunRng};

use crate::{Corridor, NetworkError, NetworkResult, RouteError};

/// One candidate destination for a source, with its draw weight.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RouteChoice {
    pub destination: NodeId,
    pub weight: f64,
}

/// The route configuration: for each generating node, the weighted set of
/// destinations its vehicles may draw.
///
/// The table is immutable during a run and shared read-only across parallel
/// runs.  Path traversal order is always the corridor sequence between the
/// drawn endpoints; only the destination itself is random.
#[derive(Clone, Default, Debug)]
pub struct RouteTable {
    routes: FxHashMap<NodeId, Vec<RouteChoice>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the choices for `source`.
    pub fn insert(&mut self, source: NodeId, choices: Vec<RouteChoice>) {
        self.routes.insert(source, choices);
    }

    pub fn choices(&self, source: NodeId) -> Option<&[RouteChoice]> {
        self.routes.get(&source).map(Vec::as_slice)
    }

    /// Default route configuration: every generator targets every removing
    /// node except itself, equally weighted.
    pub fn uniform_to_removers(corridor: &Corridor) -> RouteTable {
        let removers: Vec<NodeId> = corridor.remover_nodes().collect();
        let mut table = RouteTable::new();
        for source in corridor.generator_nodes() {
            let choices: Vec<RouteChoice> = removers
                .iter()
                .filter(|&&dest| dest != source)
                .map(|&destination| RouteChoice { destination, weight: 1.0 })
                .collect();
            table.insert(source, choices);
        }
        table
    }

    /// Pre-run validation: every generator must be routable, and every
    /// configured destination must be a removing node other than the source.
    ///
    /// A table that validates cannot produce a path that fails to terminate
    /// at a sink — the drive loop relies on this.
    pub fn validate(&self, corridor: &Corridor) -> NetworkResult<()> {
        for source in corridor.generator_nodes() {
            let choices = self
                .routes
                .get(&source)
                .filter(|c| !c.is_empty())
                .ok_or(NetworkError::UnroutedSource(source))?;

            let mut any_positive = false;
            for choice in choices {
                let dest = choice.destination;
                let node = corridor.get(dest).ok_or(NetworkError::UnknownNode(dest))?;
                if !node.removes_vehicles() {
                    return Err(NetworkError::DestinationNotASink {
                        source_node: source,
                        destination: dest,
                    });
                }
                if dest == source {
                    return Err(NetworkError::SelfDestination { source_node: source });
                }
                if !choice.weight.is_finite() || choice.weight < 0.0 {
                    return Err(NetworkError::InvalidWeight {
                        source_node: source,
                        weight: choice.weight,
                    });
                }
                any_positive |= choice.weight > 0.0;
            }
            if !any_positive {
                return Err(NetworkError::NoPositiveWeight { source_node: source });
            }
        }
        Ok(())
    }

    /// Draw a destination for `source` and return the full corridor path,
    /// source first, destination last.
    ///
    /// Failure here is recoverable: the scheduler logs a warning through the
    /// observer and the tick generates no vehicle at this source.
    pub fn draw_path(
        &self,
        corridor: &Corridor,
        source: NodeId,
        rng: &mut RunRng,
    ) -> Result<Vec<NodeId>, RouteError> {
        let choices = self
            .routes
            .get(&source)
            .filter(|c| !c.is_empty())
            .ok_or(RouteError::NoRoutesForSource(source))?;

        let weights: Vec<f64> = choices.iter().map(|c| c.weight).collect();
        let picked = rng
            .weighted_index(&weights)
            .ok_or(RouteError::NoDrawableDestination(source))?;

        Ok(corridor.path_between(source, choices[picked].destination))
    }
}
