//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use cts_core::{NodeId, RunConfig, RunRng, Tick, VehicleId};
use cts_delay::delay_duration;
use cts_network::{Corridor, NodeKind, RouteTable};

use crate::observer::SimObserver;
use crate::results::{RemovalRecord, RunResults};
use crate::vehicle::{Vehicle, VehicleState, SPEED_M_PER_TICK};
use crate::{SimError, SimResult};

/// What happened to a vehicle during its step.
enum StepOutcome {
    /// Still on the corridor (driving or waiting).
    Live,
    /// Reached a removing node and left the simulation.
    Removed { sink: NodeId },
}

/// The simulation runner for one `(scenario, seed)` combination.
///
/// Owns all mutable run state: the corridor arena, the live vehicle
/// registry, the vehicle-id counter, the route-choice RNG stream, and the
/// result table.  Nothing is shared between runs — a fresh `Sim` per run
/// means no cross-run state leakage, ever.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global run configuration.
    pub config: RunConfig,

    /// The current tick.  Advanced at the end of every processed tick.
    pub now: Tick,

    /// The node arena.  Mutable only in occupancy counts and sink buffers.
    pub corridor: Corridor,

    /// Weighted destination choices per source.  Validated at build time.
    pub routes: RouteTable,

    /// Live vehicles keyed by id.  `BTreeMap` iteration order is id order,
    /// which equals creation order — the deterministic stepping tie-break.
    pub vehicles: BTreeMap<VehicleId, Vehicle>,

    /// All removals so far, in removal order.
    pub results: RunResults,

    /// Monotonic id counter shared by every source in the run.
    pub(crate) next_vehicle_id: u64,

    /// Route-choice stream, advanced once per successful or attempted draw.
    pub(crate) route_rng: RunRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now < self.config.end_tick() {
            self.step_tick(observer)?;
        }
        observer.on_sim_end(self.now);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_tick(observer)?;
        }
        Ok(())
    }

    /// Number of vehicles currently on the corridor.
    pub fn live_vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(self.now);

        // ── Phase 1: generation ───────────────────────────────────────────
        self.generate_vehicles(observer);

        // ── Phase 2: vehicle motion ───────────────────────────────────────
        //
        // Snapshot the id set so removals cannot perturb the iteration; the
        // snapshot is taken after generation, so vehicles move in the tick
        // they are born.  Each vehicle is taken out of the registry while it
        // steps, giving the motion code unshared access to the corridor.
        let ids: Vec<VehicleId> = self.vehicles.keys().copied().collect();
        for id in ids {
            let Some(mut vehicle) = self.vehicles.remove(&id) else {
                continue;
            };
            match self.step_vehicle(&mut vehicle)? {
                StepOutcome::Live => {
                    self.vehicles.insert(id, vehicle);
                }
                StepOutcome::Removed { sink } => {
                    self.record_removal(&vehicle, sink, observer);
                }
            }
        }

        // ── Phase 3: sink-buffer aging ────────────────────────────────────
        //
        // Buffers holding a previous tick's removals are cleared, so every
        // buffer now reflects exactly this tick's removals.
        let now = self.now;
        for node in &mut self.corridor.nodes {
            if let Some(buffer) = node.sink.as_mut() {
                buffer.age(now);
            }
        }

        observer.on_tick_end(self.now, self.vehicles.len());
        self.now = self.now + 1;
        Ok(())
    }

    // ── Generation ────────────────────────────────────────────────────────

    fn generate_vehicles<O: SimObserver>(&mut self, observer: &mut O) {
        if self.now.0 % self.config.generation_frequency != 0 {
            return;
        }
        let sources: Vec<NodeId> = self.corridor.generator_nodes().collect();
        for source in sources {
            match self.routes.draw_path(&self.corridor, source, &mut self.route_rng) {
                Ok(path) => {
                    let id = VehicleId(self.next_vehicle_id);
                    self.next_vehicle_id += 1;
                    self.vehicles.insert(id, Vehicle::new(id, path, self.now));
                    self.corridor.node_mut(source).vehicle_count += 1;
                    observer.on_vehicle_generated(self.now, id, source);
                }
                // Recoverable: this tick produces no vehicle here.
                Err(err) => observer.on_generation_failed(self.now, source, &err),
            }
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    fn step_vehicle(&mut self, vehicle: &mut Vehicle) -> SimResult<StepOutcome> {
        if let VehicleState::Waiting { remaining } = vehicle.state {
            let remaining = (remaining - 1.0).max(0.0);
            if remaining > 0.0 {
                vehicle.state = VehicleState::Waiting { remaining };
                return Ok(StepOutcome::Live);
            }
            // Done waiting: note where, and drive on in the same tick.
            vehicle.waited_at = Some(vehicle.location);
            vehicle.state = VehicleState::Driving;
        }
        self.drive(vehicle)
    }

    /// Advance a driving vehicle by one tick's distance.
    ///
    /// If the distance overflows the current node, consume it node-by-node
    /// along the path until it is spent, a broken bridge stops the vehicle,
    /// or a removing node swallows it.
    fn drive(&mut self, vehicle: &mut Vehicle) -> SimResult<StepOutcome> {
        let here_length = self
            .corridor
            .get(vehicle.location)
            .ok_or_else(|| self.corrupt_path(vehicle))?
            .length_m;

        let mut remaining = vehicle.location_offset + SPEED_M_PER_TICK - here_length;
        if remaining <= 0.0 {
            // The whole tick's distance fits inside the current node.
            vehicle.location_offset += SPEED_M_PER_TICK;
            return Ok(StepOutcome::Live);
        }

        loop {
            vehicle.location_index += 1;
            let next_id = *vehicle
                .path
                .get(vehicle.location_index)
                .ok_or_else(|| self.corrupt_path(vehicle))?;
            let (next_length, next_kind, next_removes) = {
                let next = self
                    .corridor
                    .get(next_id)
                    .ok_or_else(|| self.corrupt_path(vehicle))?;
                (next.length_m, next.kind, next.removes_vehicles())
            };

            if next_removes {
                self.arrive(vehicle, next_id, 0.0);
                vehicle.removed_at = Some(self.now);
                return Ok(StepOutcome::Removed { sink: next_id });
            }

            if let NodeKind::Bridge { delayed, .. } = next_kind {
                let duration =
                    delay_duration(delayed, next_length, self.config.seed, self.now);
                if duration > 0.0 {
                    self.arrive(vehicle, next_id, 0.0);
                    vehicle.state = VehicleState::Waiting { remaining: duration };
                    return Ok(StepOutcome::Live);
                }
                // Intact this tick: cross it like a plain link.
            }

            if next_length > remaining {
                self.arrive(vehicle, next_id, remaining);
                return Ok(StepOutcome::Live);
            }
            remaining -= next_length;
        }
    }

    /// Move `vehicle` onto `node`, keeping occupancy counters consistent.
    fn arrive(&mut self, vehicle: &mut Vehicle, node: NodeId, offset: f64) {
        self.corridor.node_mut(vehicle.location).vehicle_count -= 1;
        vehicle.location = node;
        vehicle.location_offset = offset;
        self.corridor.node_mut(node).vehicle_count += 1;
    }

    // ── Removal ───────────────────────────────────────────────────────────

    fn record_removal<O: SimObserver>(
        &mut self,
        vehicle: &Vehicle,
        sink: NodeId,
        observer: &mut O,
    ) {
        let transit_ticks = self.now.since(vehicle.generated_at);

        // The vehicle ceases to exist: its occupancy reference goes with it.
        let node = self.corridor.node_mut(sink);
        node.vehicle_count -= 1;
        if let Some(buffer) = node.sink.as_mut() {
            buffer.record(self.now, vehicle.id, transit_ticks);
        }

        let record = RemovalRecord {
            tick: self.now,
            sink,
            vehicle: vehicle.id,
            generated_at: vehicle.generated_at,
            transit_ticks,
        };
        observer.on_vehicle_removed(self.now, &record);
        self.results.push(record);
    }

    fn corrupt_path(&self, vehicle: &Vehicle) -> SimError {
        SimError::CorruptPath {
            vehicle: vehicle.id,
            tick: self.now,
            node: vehicle.location,
        }
    }
}
