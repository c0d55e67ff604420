//! The vehicle: the simulation's only active agent.

use cts_core::{NodeId, Tick, VehicleId};

/// Distance a vehicle covers per tick: 50 km/h at 1 tick = 1 minute.
///
/// A run-wide constant, not a per-vehicle attribute — every truck in the
/// fleet drives the same nominal speed.
pub const SPEED_M_PER_TICK: f64 = 50.0 * 1000.0 / 60.0;

/// The two-state motion machine.
///
/// There is no terminal state: a vehicle that reaches a removing node is
/// deleted from the live set entirely rather than parked in a "done" state.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum VehicleState {
    Driving,
    /// Stopped at a bridge.  `remaining` decrements by 1 each tick (floor 0);
    /// fractional durations come straight from the delay model's draws.
    Waiting { remaining: f64 },
}

/// One truck.
///
/// The vehicle holds its node ids only — the scheduler owns the corridor
/// arena, and all state shared with nodes (occupancy counts, sink buffers)
/// is updated through it.
#[derive(Clone, PartialEq, Debug)]
pub struct Vehicle {
    pub id: VehicleId,

    /// The full node-id sequence from source to destination, fixed at
    /// creation.  Traversal only ever moves forward through it.
    pub path: Vec<NodeId>,

    /// The node currently occupied.  Invariant: `path[location_index]`.
    pub location: NodeId,

    /// Index of `location` within `path`.  Non-decreasing over the
    /// vehicle's lifetime.
    pub location_index: usize,

    /// Metres from the start of `location`.  Invariant
    /// `0 <= offset <= location.length_m`; equality with the length only
    /// occurs transiently, before the next tick advances the vehicle.
    pub location_offset: f64,

    pub state: VehicleState,

    /// The bridge this vehicle most recently finished waiting at.
    pub waited_at: Option<NodeId>,

    pub generated_at: Tick,

    /// Stamped by the scheduler when the vehicle reaches a removing node;
    /// `None` while live.
    pub removed_at: Option<Tick>,
}

impl Vehicle {
    /// A fresh vehicle positioned at the head of `path`.
    ///
    /// `path` must be non-empty and terminate at a removing node; the route
    /// table guarantees both before any vehicle is created.
    pub fn new(id: VehicleId, path: Vec<NodeId>, generated_at: Tick) -> Vehicle {
        let location = path[0];
        Vehicle {
            id,
            path,
            location,
            location_index: 0,
            location_offset: 0.0,
            state: VehicleState::Driving,
            waited_at: None,
            generated_at,
            removed_at: None,
        }
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        matches!(self.state, VehicleState::Waiting { .. })
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} +{} {:?} at {}+{:.1}m",
            self.id, self.generated_at, self.state, self.location, self.location_offset
        )
    }
}
