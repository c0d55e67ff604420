//! Network-subsystem error types.
//!
//! `NetworkError` covers fatal configuration problems caught before a run
//! starts.  `RouteError` is the one recoverable failure class: a source that
//! cannot resolve a destination at generation time — the scheduler reports
//! it as a warning and the tick simply produces no vehicle.

use thiserror::Error;

use cts_core::{NodeId, ScenarioError};

/// Fatal topology/route configuration errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("topology contains no nodes")]
    EmptyTopology,

    #[error("non-contiguous node id: row {row} carries id {got} (expected {expected})")]
    NonContiguousId { row: usize, got: u32, expected: u32 },

    #[error("node {node} has invalid length {length} (must be finite and >= 0)")]
    InvalidLength { node: NodeId, length: f64 },

    #[error("bridge {node} is missing a condition grade")]
    MissingCondition { node: NodeId },

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("corridor mixes roads: expected {expected:?}, row {row} has {got:?}")]
    MixedRoads { expected: String, got: String, row: usize },

    #[error("corridor has no vehicle-generating node")]
    NoGenerators,

    #[error("corridor has no vehicle-removing node")]
    NoRemovers,

    #[error("route table has no entry for generating node {0}")]
    UnroutedSource(NodeId),

    // Field deliberately not named `source`: thiserror would wire such a
    // field into `Error::source()`, which `NodeId` cannot satisfy.
    #[error("route from {source_node} targets {destination}, which does not remove vehicles")]
    DestinationNotASink { source_node: NodeId, destination: NodeId },

    #[error("route from {source_node} targets itself")]
    SelfDestination { source_node: NodeId },

    #[error("route from {source_node} has invalid weight {weight} (must be finite and >= 0)")]
    InvalidWeight { source_node: NodeId, weight: f64 },

    #[error("routes from {source_node} have no positive weight")]
    NoPositiveWeight { source_node: NodeId },

    #[error("route references unknown node {0}")]
    UnknownNode(NodeId),

    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for this crate.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Recoverable per-generation routing failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route configured for source {0}")]
    NoRoutesForSource(NodeId),

    #[error("no destination drawable for source {0} (all weights zero)")]
    NoDrawableDestination(NodeId),
}
