//! Infrastructure nodes: passive resources vehicles move across.

use cts_core::{Condition, GeoPoint, NodeId, Tick, VehicleId};

// ── NodeKind ──────────────────────────────────────────────────────────────────

/// The closed set of node flavours.
///
/// A `SourceSink` is a node holding two independent capabilities —
/// generation and removal — invoked separately each tick.  The capabilities
/// are exposed through [`InfraNode::generates_vehicles`] and
/// [`InfraNode::removes_vehicles`] rather than through subtyping.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Link,
    /// A bridge with its condition grade and the run-wide "broken" flag.
    ///
    /// `delayed` is decided exactly once at corridor construction from
    /// `(run seed, node id)` and the scenario threshold table; it is never
    /// re-rolled afterwards.
    Bridge { condition: Condition, delayed: bool },
    Source,
    Sink,
    SourceSink,
}

// ── SinkBuffer ────────────────────────────────────────────────────────────────

/// Per-tick removal buffer carried by sink-capable nodes.
///
/// The contract is "the buffer reflects only removals from the current
/// tick".  Clearing is lazy: the first removal of a tick clears whatever the
/// previous removal tick left behind, and the scheduler's end-of-tick aging
/// pass clears buffers of sinks that saw no removal this tick.  Between
/// multiple removals in the same tick, nothing is cleared.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SinkBuffer {
    /// `(vehicle, transit ticks)` for every vehicle removed this tick.
    pub removed: Vec<(VehicleId, u64)>,

    /// Tick of the most recent removal; `None` until the first one.
    pub last_removal_tick: Option<Tick>,

    /// Flipped on every removal — lets tests and collectors detect
    /// "something was removed this tick" without inspecting the buffer.
    pub removed_toggle: bool,
}

impl SinkBuffer {
    /// Record one removal at `now`.
    pub fn record(&mut self, now: Tick, vehicle: VehicleId, transit_ticks: u64) {
        if self.last_removal_tick != Some(now) {
            self.removed.clear();
        }
        self.removed.push((vehicle, transit_ticks));
        self.last_removal_tick = Some(now);
        self.removed_toggle = !self.removed_toggle;
    }

    /// End-of-tick aging: drop entries that did not originate at `now`.
    pub fn age(&mut self, now: Tick) {
        if self.last_removal_tick != Some(now) {
            self.removed.clear();
        }
    }
}

// ── InfraNode ─────────────────────────────────────────────────────────────────

/// One node of the corridor arena.
///
/// Nodes never perform motion logic; they answer queries about length and
/// capabilities, count the vehicles currently located on them, and (for
/// sink-capable nodes) buffer the tick's removals.
#[derive(Clone, PartialEq, Debug)]
pub struct InfraNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: String,
    pub road: String,
    pub pos: GeoPoint,
    /// Length in metres; zero for point-like nodes.
    pub length_m: f64,
    /// Number of live vehicles whose `location` is this node.
    pub vehicle_count: u32,
    /// Present iff `removes_vehicles()`.
    pub sink: Option<SinkBuffer>,
}

impl InfraNode {
    /// Does this node spawn vehicles on generation ticks?
    #[inline]
    pub fn generates_vehicles(&self) -> bool {
        matches!(self.kind, NodeKind::Source | NodeKind::SourceSink)
    }

    /// Does this node remove arriving vehicles?
    #[inline]
    pub fn removes_vehicles(&self) -> bool {
        matches!(self.kind, NodeKind::Sink | NodeKind::SourceSink)
    }

    #[inline]
    pub fn is_bridge(&self) -> bool {
        matches!(self.kind, NodeKind::Bridge { .. })
    }
}
