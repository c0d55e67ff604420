//! The corridor: a validated, arena-style registry of infrastructure nodes.

use cts_core::{GeoPoint, NodeId, Scenario};
use cts_delay::delay_occurs;

use crate::node::{InfraNode, NodeKind, SinkBuffer};
use crate::record::{ModelType, TopologyRecord};
use crate::{NetworkError, NetworkResult};

/// A single linear road corridor.
///
/// Nodes live in a `Vec` indexed by `NodeId`; node `i` is adjacent to node
/// `i + 1` and nothing else.  Vehicles reference nodes by id only, never by
/// pointer, so occupancy counters stay consistent under the strictly
/// sequential stepping in `cts-sim`.
#[derive(Clone, PartialEq, Debug)]
pub struct Corridor {
    /// The arena.  Position in the vector equals `NodeId`.
    pub nodes: Vec<InfraNode>,

    /// The single road name shared by every node.
    pub road: String,
}

impl Corridor {
    /// Build and validate a corridor from topology records.
    ///
    /// `scenario` and `seed` are needed here because each bridge's "broken"
    /// flag is rolled exactly once, at construction, from
    /// `(seed + node id)` against the scenario's threshold table.
    ///
    /// # Errors
    ///
    /// Any malformed record (see [`NetworkError`]) aborts construction; a
    /// corridor that builds successfully cannot fail validation mid-run.
    pub fn build(
        records: &[TopologyRecord],
        scenario: Scenario,
        seed: u64,
    ) -> NetworkResult<Corridor> {
        if records.is_empty() {
            return Err(NetworkError::EmptyTopology);
        }

        let road = records[0].road.clone();
        let mut nodes = Vec::with_capacity(records.len());

        for (row, rec) in records.iter().enumerate() {
            if rec.id as usize != row {
                return Err(NetworkError::NonContiguousId {
                    row,
                    got: rec.id,
                    expected: row as u32,
                });
            }
            let id = NodeId(rec.id);

            if !rec.length.is_finite() || rec.length < 0.0 {
                return Err(NetworkError::InvalidLength { node: id, length: rec.length });
            }
            if rec.road != road {
                return Err(NetworkError::MixedRoads {
                    expected: road,
                    got: rec.road.clone(),
                    row,
                });
            }

            let kind = match rec.model_type {
                ModelType::Link => NodeKind::Link,
                ModelType::Source => NodeKind::Source,
                ModelType::Sink => NodeKind::Sink,
                ModelType::SourceSink => NodeKind::SourceSink,
                ModelType::Bridge => {
                    let raw = rec
                        .condition
                        .as_deref()
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .ok_or(NetworkError::MissingCondition { node: id })?;
                    let condition = raw.parse()?;
                    let delayed = delay_occurs(scenario, condition, seed, id);
                    NodeKind::Bridge { condition, delayed }
                }
            };

            let sink = matches!(kind, NodeKind::Sink | NodeKind::SourceSink)
                .then(SinkBuffer::default);

            nodes.push(InfraNode {
                id,
                kind,
                name: rec.name.clone(),
                road: rec.road.clone(),
                pos: GeoPoint::new(rec.lat, rec.lon),
                length_m: rec.length,
                vehicle_count: 0,
                sink,
            });
        }

        let corridor = Corridor { nodes, road };
        if corridor.generator_nodes().next().is_none() {
            return Err(NetworkError::NoGenerators);
        }
        if corridor.remover_nodes().next().is_none() {
            return Err(NetworkError::NoRemovers);
        }
        Ok(corridor)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&InfraNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut InfraNode> {
        self.nodes.get_mut(id.index())
    }

    /// Direct access for ids known to be valid (everything inside a built
    /// corridor).  Panics on out-of-range ids; motion code that works with
    /// path-supplied ids goes through [`get`](Self::get) instead.
    #[inline]
    pub fn node(&self, id: NodeId) -> &InfraNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut InfraNode {
        &mut self.nodes[id.index()]
    }

    // ── Capability scans ──────────────────────────────────────────────────

    /// Ids of all vehicle-generating nodes, in corridor order.
    pub fn generator_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.generates_vehicles())
            .map(|n| n.id)
    }

    /// Ids of all vehicle-removing nodes, in corridor order.
    pub fn remover_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.removes_vehicles())
            .map(|n| n.id)
    }

    /// Sum of all node occupancy counters.
    ///
    /// Invariant: equals the number of live vehicles at every observation
    /// point between ticks.
    pub fn total_vehicle_count(&self) -> u64 {
        self.nodes.iter().map(|n| n.vehicle_count as u64).sum()
    }

    // ── Paths ─────────────────────────────────────────────────────────────

    /// The node-id sequence from `from` to `to` along the corridor.
    ///
    /// Since adjacency is strictly linear the path is the contiguous id
    /// range, ascending or descending.  Both endpoints are included.
    pub fn path_between(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        if from <= to {
            (from.0..=to.0).map(NodeId).collect()
        } else {
            (to.0..=from.0).rev().map(NodeId).collect()
        }
    }
}
