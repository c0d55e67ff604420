//! `cts-network` — the static infrastructure side of the corridor simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`record`]   | `TopologyRecord`, `ModelType` — raw input rows             |
//! | [`node`]     | `InfraNode`, `NodeKind`, `SinkBuffer`                      |
//! | [`corridor`] | `Corridor` — validated node arena, adjacency, paths        |
//! | [`routes`]   | `RouteTable` — weighted destination choice per source      |
//! | [`loader`]   | CSV topology loading                                       |
//! | [`error`]    | `NetworkError`, `RouteError`                               |
//!
//! # Model
//!
//! A corridor is a single linear sequence of nodes: node `i` is adjacent to
//! node `i + 1` and nothing else.  Nodes are passive — they hold physical
//! attributes and an occupancy count, and sink-capable nodes buffer the
//! current tick's removals.  All motion logic lives in `cts-sim`.
//!
//! Topology problems (gappy ids, negative lengths, a bridge without a
//! condition grade, a route that does not end at a sink) are configuration
//! errors, rejected here before a run starts — never discovered mid-tick.

pub mod corridor;
pub mod error;
pub mod loader;
pub mod node;
pub mod record;
pub mod routes;


pub use corridor::Corridor;
pub use error::{NetworkError, NetworkResult, RouteError};
pub use loader::{load_corridor_csv, load_corridor_reader};
pub use node::{InfraNode, NodeKind, SinkBuffer};
pub use record::{ModelType, TopologyRecord};
pub use routes::{RouteChoice, RouteTable};
