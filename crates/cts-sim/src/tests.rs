//! Unit tests for cts-sim.

use cts_core::{NodeId, RunConfig, Scenario, Tick, VehicleId};
use cts_network::{ModelType, TopologyRecord};

use crate::{NoopObserver, SimBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rec(id: u32, model_type: ModelType, length: f64, condition: Option<&str>) -> TopologyRecord {
    TopologyRecord {
        id,
        road: "N1".to_owned(),
        model_type,
        name: format!("node {id}"),
        lat: 23.7 + id as f32 * 0.01,
        lon: 90.4 + id as f32 * 0.01,
        length,
        condition: condition.map(str::to_owned),
    }
}

/// source → 500 m link → sink.  Short enough to cross in a single tick.
fn short_records() -> Vec<TopologyRecord> {
    vec![
        rec(0, ModelType::Source, 0.0, None),
        rec(1, ModelType::Link, 500.0, None),
        rec(2, ModelType::Sink, 0.0, None),
    ]
}

/// source → 100 km link → sink.  Nothing reaches the sink in a short run.
fn long_records() -> Vec<TopologyRecord> {
    vec![
        rec(0, ModelType::Source, 0.0, None),
        rec(1, ModelType::Link, 100_000.0, None),
        rec(2, ModelType::Sink, 0.0, None),
    ]
}

/// source → link → bridge(D) → link → sink, all pre-bridge distance within
/// one tick's travel.
fn bridged_records() -> Vec<TopologyRecord> {
    vec![
        rec(0, ModelType::Source, 0.0, None),
        rec(1, ModelType::Link, 500.0, None),
        rec(2, ModelType::Bridge, 100.0, Some("D")),
        rec(3, ModelType::Link, 500.0, None),
        rec(4, ModelType::Sink, 0.0, None),
    ]
}

fn scenario(n: u8) -> Scenario {
    Scenario::new(n).unwrap()
}

fn config(scenario_number: u8, seed: u64, total_ticks: u64) -> RunConfig {
    RunConfig::new(scenario(scenario_number), seed, total_ticks)
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn zero_generation_frequency_rejected() {
        let mut cfg = config(0, 1, 10);
        cfg.generation_frequency = 0;
        let err = SimBuilder::new(cfg, &short_records()).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn topology_errors_surface_at_build() {
        let err = SimBuilder::new(config(0, 1, 10), &[]).build().err().unwrap();
        assert!(matches!(err, SimError::Network(_)));
    }

    #[test]
    fn built_sim_starts_at_tick_zero_and_empty() {
        let sim = SimBuilder::new(config(0, 1, 10), &short_records())
            .build()
            .unwrap();
        assert_eq!(sim.now, Tick::ZERO);
        assert_eq!(sim.live_vehicle_count(), 0);
        assert!(sim.results.is_empty());
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generation {
    use super::*;

    #[test]
    fn cadence_follows_frequency() {
        let mut sim = SimBuilder::new(config(0, 1, 100), &long_records())
            .build()
            .unwrap();
        sim.run_ticks(20, &mut NoopObserver).unwrap();

        // Generation ticks 0, 5, 10, 15; the link is too long to finish.
        assert_eq!(sim.live_vehicle_count(), 4);
        let born: Vec<Tick> = sim.vehicles.values().map(|v| v.generated_at).collect();
        assert_eq!(born, vec![Tick(0), Tick(5), Tick(10), Tick(15)]);
    }

    #[test]
    fn vehicle_ids_are_run_global_and_monotonic() {
        let records = vec![
            rec(0, ModelType::SourceSink, 0.0, None),
            rec(1, ModelType::Link, 100_000.0, None),
            rec(2, ModelType::SourceSink, 0.0, None),
        ];
        let mut sim = SimBuilder::new(config(0, 1, 100), &records)
            .build()
            .unwrap();
        sim.run_ticks(6, &mut NoopObserver).unwrap();

        // Both ends generate on ticks 0 and 5, in corridor order.
        let ids: Vec<VehicleId> = sim.vehicles.keys().copied().collect();
        assert_eq!(
            ids,
            vec![VehicleId(0), VehicleId(1), VehicleId(2), VehicleId(3)]
        );
        assert_eq!(sim.vehicles[&VehicleId(0)].path[0], NodeId(0));
        assert_eq!(sim.vehicles[&VehicleId(1)].path[0], NodeId(2));
        assert_eq!(
            sim.vehicles[&VehicleId(1)].path,
            vec![NodeId(2), NodeId(1), NodeId(0)]
        );
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn short_corridor_crossed_in_generation_tick() {
        let mut sim = SimBuilder::new(config(0, 1, 100), &short_records())
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        assert_eq!(sim.live_vehicle_count(), 0);
        assert_eq!(sim.results.len(), 1);
        let record = sim.results.records[0];
        assert_eq!(record.tick, Tick(0));
        assert_eq!(record.sink, NodeId(2));
        assert_eq!(record.vehicle, VehicleId(0));
        assert_eq!(record.generated_at, Tick(0));
        assert_eq!(record.transit_ticks, 0);
        assert_eq!(sim.results.mean_transit_ticks(), Some(0.0));
    }

    #[test]
    fn sink_buffer_holds_only_the_current_ticks_removals() {
        let mut sim = SimBuilder::new(config(0, 1, 100), &short_records())
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        let buffer = sim.corridor.node(NodeId(2)).sink.as_ref().unwrap();
        assert_eq!(buffer.removed, vec![(VehicleId(0), 0)]);

        // Tick 1 removes nothing, so aging clears the buffer.
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        let buffer = sim.corridor.node(NodeId(2)).sink.as_ref().unwrap();
        assert!(buffer.removed.is_empty());
    }

    #[test]
    fn occupancy_counts_track_live_vehicles() {
        let mut sim = SimBuilder::new(config(0, 1, 100), &bridged_records())
            .build()
            .unwrap();
        for _ in 0..30 {
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            assert_eq!(
                sim.corridor.total_vehicle_count(),
                sim.live_vehicle_count() as u64
            );
        }
    }

    #[test]
    fn paths_are_traversed_monotonically() {
        let mut sim = SimBuilder::new(config(0, 1, 100), &long_records())
            .build()
            .unwrap();
        let mut last_index: HashMap<VehicleId, usize> = HashMap::new();

        for _ in 0..50 {
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            for vehicle in sim.vehicles.values() {
                assert_eq!(vehicle.path[vehicle.location_index], vehicle.location);
                let length = sim.corridor.node(vehicle.location).length_m;
                assert!(vehicle.location_offset >= 0.0);
                assert!(vehicle.location_offset <= length);

                let previous = last_index.insert(vehicle.id, vehicle.location_index);
                if let Some(previous) = previous {
                    assert!(vehicle.location_index >= previous);
                }
            }
        }
    }

    #[test]
    fn corrupt_path_aborts_the_run() {
        let mut sim = SimBuilder::new(config(0, 1, 100), &long_records())
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        // Point the vehicle's path at a node outside the corridor and put it
        // on the brink of crossing into it.
        let vehicle = sim.vehicles.values_mut().next().unwrap();
        vehicle.path = vec![vehicle.location, NodeId(99)];
        vehicle.location_index = 0;
        vehicle.location_offset = 99_990.0;

        let err = sim.run_ticks(1, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::CorruptPath { node: NodeId(1), .. }));
    }
}

// ── Bridge delays ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod delays {
    use cts_core::Condition;
    use cts_delay::delay_occurs;

    use super::*;

    /// A seed under which the bridge in [`bridged_records`] is broken.
    fn broken_seed() -> u64 {
        (0u64..)
            .find(|&s| delay_occurs(scenario(8), Condition::D, s, NodeId(2)))
            .unwrap()
    }

    #[test]
    fn vehicles_wait_at_a_broken_bridge() {
        let mut sim = SimBuilder::new(config(8, broken_seed(), 300), &bridged_records())
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver).unwrap();

        let vehicle = &sim.vehicles[&VehicleId(0)];
        assert!(vehicle.is_waiting());
        assert_eq!(vehicle.location, NodeId(2));

        // Category-D delays on a 100 m bridge draw from [45, 90) minutes, so
        // the vehicle is still parked ten ticks in.
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert!(sim.vehicles[&VehicleId(0)].is_waiting());
    }

    #[test]
    fn waiting_ends_and_transit_reflects_the_delay() {
        let mut sim = SimBuilder::new(config(8, broken_seed(), 300), &bridged_records())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        assert!(!sim.results.is_empty());
        for record in &sim.results.records {
            // Every removed vehicle sat out one full [45, 90)-minute delay
            // draw plus the single driving tick the post-bridge stretch costs.
            assert!(record.transit_ticks >= 46, "transit {}", record.transit_ticks);
            assert!(record.transit_ticks <= 91, "transit {}", record.transit_ticks);
        }
    }

    #[test]
    fn intact_scenario_never_delays() {
        let mut sim = SimBuilder::new(config(0, broken_seed(), 100), &bridged_records())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        // 1,100 m of corridor takes two ticks at 833 m/tick.
        assert!(sim.results.records.iter().all(|r| r.transit_ticks == 1));
        assert_eq!(sim.results.len(), 20);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn identical_configs_give_identical_results() {
        let run = |seed: u64| {
            let mut sim = SimBuilder::new(config(4, seed, 200), &bridged_records())
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.results
        };
        assert_eq!(run(1234567), run(1234567));
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use super::*;
    use crate::{run_batch, sweep, BatchConfig, RunSpec};

    #[test]
    fn sweep_is_scenario_major() {
        let specs = sweep(&[scenario(0), scenario(1)], &[10, 20]);
        assert_eq!(
            specs,
            vec![
                RunSpec { scenario: scenario(0), seed: 10 },
                RunSpec { scenario: scenario(0), seed: 20 },
                RunSpec { scenario: scenario(1), seed: 10 },
                RunSpec { scenario: scenario(1), seed: 20 },
            ]
        );
    }

    #[test]
    fn batch_matches_individual_runs() {
        let records = bridged_records();
        let batch = BatchConfig::new(100);
        let specs = sweep(&[scenario(0), scenario(8)], &[1234567, 1234568]);

        let results = run_batch(&records, None, &batch, &specs).unwrap();
        assert_eq!(results.len(), specs.len());

        for (spec, results) in specs.iter().zip(&results) {
            assert_eq!(results.scenario, spec.scenario);
            assert_eq!(results.seed, spec.seed);

            let mut sim = SimBuilder::new(
                RunConfig::new(spec.scenario, spec.seed, 100),
                &records,
            )
            .build()
            .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            assert_eq!(&sim.results, results);
        }
    }
}
