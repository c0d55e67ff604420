//! Delay occurrence and duration draws.

use cts_core::{BridgeRng, Condition, NodeId, Scenario, Tick, TickRng};

// ── Occurrence ────────────────────────────────────────────────────────────────

/// Does `roll` trigger a delay for this scenario/condition combination?
///
/// Pure threshold comparison, split out from [`delay_occurs`] so the table
/// boundaries can be tested without reconstructing the RNG stream.
#[inline]
pub fn occurs_with_roll(scenario: Scenario, condition: Condition, roll: u8) -> bool {
    match scenario.threshold(condition) {
        None => false,
        Some(threshold) => roll <= threshold,
    }
}

/// Decide whether the bridge at `node` is broken for this run.
///
/// Seeds a fresh stream from `(seed, node)` and draws exactly one roll.
/// Deterministic: the same `(seed, node, scenario, condition)` always gives
/// the same answer.  Called once per bridge at corridor construction; the
/// result is baked into the node and never re-rolled.
pub fn delay_occurs(scenario: Scenario, condition: Condition, seed: u64, node: NodeId) -> bool {
    let roll = BridgeRng::new(seed, node).break_roll();
    occurs_with_roll(scenario, condition, roll)
}

// ── Duration ──────────────────────────────────────────────────────────────────

/// Delay duration in ticks for one crossing attempt at `now`.
///
/// Returns 0 for an intact bridge.  For a broken bridge the draw depends on
/// the length band: short bridges clear in minutes, long ones can block for
/// hours.  The stream is seeded from `(seed, now)` only, so every vehicle
/// querying any broken bridge of the same band in the same tick sees the
/// same duration, and the next tick draws afresh.
pub fn delay_duration(delayed: bool, length_m: f64, seed: u64, now: Tick) -> f64 {
    if !delayed {
        return 0.0;
    }
    let mut rng = TickRng::new(seed, now);
    if length_m <= 10.0 {
        rng.uniform(10.0, 20.0)
    } else if length_m <= 50.0 {
        rng.uniform(15.0, 60.0)
    } else if length_m <= 200.0 {
        rng.uniform(45.0, 90.0)
    } else {
        rng.triangular(60.0, 240.0, 120.0)
    }
}
