//! Scheduler error type.

use thiserror::Error;

use cts_core::{NodeId, Tick, VehicleId};
use cts_network::NetworkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Network(#[from] NetworkError),

    /// A vehicle's path ran past its end or referenced a node outside the
    /// corridor.  This cannot happen with a validated route table; seeing it
    /// means state corruption, so the run aborts with full context instead
    /// of skipping the vehicle.
    #[error("corrupt path for {vehicle} at {tick}: current node {node}")]
    CorruptPath {
        vehicle: VehicleId,
        tick: Tick,
        node: NodeId,
    },
}

pub type SimResult<T> = Result<T, SimError>;
