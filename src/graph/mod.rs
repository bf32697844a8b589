//! Graph data structures and operations.
//!
//! This module provides the core graph structure using petgraph's StableGraph,
//! with SoA position buffers and insertion-ordered neighbor lists kept
//! alongside the topology.

mod edge;
mod network;
mod node;

pub use edge::EdgeKey;
pub use network::Network;
pub use node::NodeId;
