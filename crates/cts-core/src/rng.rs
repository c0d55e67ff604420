//! Deterministic RNG streams used by the delay model and the scheduler.
//!
//! # Determinism strategy
//!
//! The engine never touches platform entropy.  Every draw comes from a
//! `SmallRng` seeded from the run's master seed plus a context offset:
//!
//! | Stream        | Seed                | Drawn                               |
//! |---------------|---------------------|-------------------------------------|
//! | [`BridgeRng`] | `seed + node_id`    | once, at corridor construction      |
//! | [`TickRng`]   | `seed + tick`       | fresh on every delay-duration query |
//! | [`RunRng`]    | `seed`              | sequentially, for route choices     |
//!
//! Seeding `TickRng` from the tick alone is intentional: every vehicle that
//! queries a bridge in the same tick observes the same duration, while
//! queries in different ticks get independent draws.  Tests pin these draws
//! bit-for-bit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{NodeId, Tick};

// ── BridgeRng ─────────────────────────────────────────────────────────────────

/// Per-node stream used for the one-shot "is this bridge broken?" roll.
pub struct BridgeRng(SmallRng);

impl BridgeRng {
    /// Seed deterministically from the run seed and a node ID.
    pub fn new(seed: u64, node: NodeId) -> Self {
        BridgeRng(SmallRng::seed_from_u64(seed.wrapping_add(node.0 as u64)))
    }

    /// One integer roll, uniform in `[1, 100]`.
    #[inline]
    pub fn break_roll(&mut self) -> u8 {
        self.0.gen_range(1..=100)
    }
}

// ── TickRng ───────────────────────────────────────────────────────────────────

/// Per-tick stream used for delay-duration draws.
///
/// Re-created on every query; the seed depends only on `(run seed, tick)`,
/// never on which vehicle or bridge is asking.
pub struct TickRng(SmallRng);

impl TickRng {
    pub fn new(seed: u64, tick: Tick) -> Self {
        TickRng(SmallRng::seed_from_u64(seed.wrapping_add(tick.0)))
    }

    /// Uniform draw in `[lo, hi)`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..hi)
    }

    /// Triangular draw in `[min, max]` with the given mode.
    ///
    /// Inverse-CDF transform of a single uniform draw, the same construction
    /// as Python's `random.triangular`: one branch below the mode, one above.
    pub fn triangular(&mut self, min: f64, max: f64, mode: f64) -> f64 {
        let u: f64 = self.0.gen_range(0.0..1.0);
        let span = max - min;
        if span <= 0.0 {
            return min;
        }
        let cut = (mode - min) / span;
        if u < cut {
            min + (u * span * (mode - min)).sqrt()
        } else {
            max - ((1.0 - u) * span * (max - mode)).sqrt()
        }
    }
}

// ── RunRng ────────────────────────────────────────────────────────────────────

/// Run-level stream for route-choice draws.
///
/// One per run, created by the scheduler and advanced sequentially — the
/// draw order is the deterministic source-iteration order, so identical
/// configurations replay identical routes.
pub struct RunRng(SmallRng);

impl RunRng {
    pub fn new(seed: u64) -> Self {
        RunRng(SmallRng::seed_from_u64(seed))
    }

    /// Pick an index with probability proportional to `weights[i]`.
    ///
    /// Returns `None` if `weights` is empty or sums to a non-positive or
    /// non-finite total.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().sum();
        if weights.is_empty() || !total.is_finite() || total <= 0.0 {
            return None;
        }
        let mut draw = self.0.gen_range(0.0..total);
        for (i, &w) in weights.iter().enumerate() {
            if draw < w {
                return Some(i);
            }
            draw -= w;
        }
        // Floating-point edge: fall back to the last positive weight.
        weights.iter().rposition(|&w| w > 0.0)
    }
}
