//! Risk scenarios, bridge condition grades, and the delay-threshold table.
//!
//! A scenario selects one row of the threshold table below.  A bridge whose
//! construction-time roll (uniform in `[1, 100]`) lands at or below the
//! threshold for its condition grade is "broken" for the whole run.
//!
//! | scenario | A  | B  | C  | D  |
//! |----------|----|----|----|----|
//! | 0        | –  | –  | –  | –  |
//! | 1        | –  | –  | –  | 5  |
//! | 2        | –  | –  | –  | 10 |
//! | 3        | –  | –  | 5  | 10 |
//! | 4        | –  | –  | 10 | 20 |
//! | 5        | –  | 5  | 10 | 20 |
//! | 6        | –  | 10 | 20 | 40 |
//! | 7        | 5  | 10 | 20 | 40 |
//! | 8        | 10 | 20 | 40 | 80 |
//!
//! `–` means that combination never delays.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ── Condition ─────────────────────────────────────────────────────────────────

/// Structural condition grade of a bridge, A (best) to D (worst).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Condition {
    A,
    B,
    C,
    D,
}

impl Condition {
    pub const ALL: [Condition; 4] = [Condition::A, Condition::B, Condition::C, Condition::D];

    /// Column index into the threshold table.
    #[inline]
    fn column(self) -> usize {
        match self {
            Condition::A => 0,
            Condition::B => 1,
            Condition::C => 2,
            Condition::D => 3,
        }
    }
}

impl FromStr for Condition {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Condition::A),
            "B" | "b" => Ok(Condition::B),
            "C" | "c" => Ok(Condition::C),
            "D" | "d" => Ok(Condition::D),
            other => Err(ScenarioError::InvalidCondition(other.to_owned())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Condition::A => 'A',
            Condition::B => 'B',
            Condition::C => 'C',
            Condition::D => 'D',
        };
        write!(f, "{c}")
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Threshold rows indexed by scenario; 0 encodes "never delays".
const THRESHOLDS: [[u8; 4]; 9] = [
    [0, 0, 0, 0],
    [0, 0, 0, 5],
    [0, 0, 0, 10],
    [0, 0, 5, 10],
    [0, 0, 10, 20],
    [0, 5, 10, 20],
    [0, 10, 20, 40],
    [5, 10, 20, 40],
    [10, 20, 40, 80],
];

/// A validated risk scenario in `0..=8`, shared by all bridges in a run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Scenario(u8);

impl Scenario {
    /// All nine scenarios in ascending order — the full experiment sweep.
    pub const ALL: [Scenario; 9] = [
        Scenario(0),
        Scenario(1),
        Scenario(2),
        Scenario(3),
        Scenario(4),
        Scenario(5),
        Scenario(6),
        Scenario(7),
        Scenario(8),
    ];

    /// Validate a raw scenario number.
    pub fn new(n: u8) -> Result<Scenario, ScenarioError> {
        if n as usize >= THRESHOLDS.len() {
            return Err(ScenarioError::InvalidScenario(n));
        }
        Ok(Scenario(n))
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// The delay threshold for `condition` under this scenario, or `None` if
    /// that combination never delays.  A roll `<= threshold` triggers a delay.
    pub fn threshold(self, condition: Condition) -> Option<u8> {
        match THRESHOLDS[self.0 as usize][condition.column()] {
            0 => None,
            t => Some(t),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scenario {}", self.0)
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("scenario {0} out of range (expected 0..=8)")]
    InvalidScenario(u8),

    #[error("invalid bridge condition {0:?} (expected A, B, C, or D)")]
    InvalidCondition(String),
}
