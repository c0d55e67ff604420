//! `cts-delay` — the bridge delay model.
//!
//! Two independent sub-decisions, with deliberately different RNG lifetimes:
//!
//! 1. **Occurrence** — decided once per bridge at corridor construction,
//!    seeded `(run seed + node id)`.  A roll in `[1, 100]` at or below the
//!    scenario/condition threshold marks the bridge broken for the whole run.
//! 2. **Duration** — redrawn on *every* query, seeded `(run seed + tick)`.
//!    The duration depends on the bridge's length band; an intact bridge
//!    always answers 0.
//!
//! The asymmetry (occurrence frozen at construction, duration redrawn per
//! query) is part of the reproducibility contract: regression tests pin the
//! resulting draws.  Do not cache durations or re-roll occurrence.

pub mod model;


pub use model::{delay_duration, delay_occurs, occurs_with_roll};
