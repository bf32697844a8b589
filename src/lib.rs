//! Ring Network - a tiny node-network visualizer.
//!
//! Builds a fixed 8-node graph (a ring plus two long-range links), lays the
//! nodes out on a unit circle, renders edges and labeled nodes to an SVG
//! figure, and prints the adjacency list.
//!
//! # Architecture
//!
//! - `graph`: Graph data structure using petgraph's StableGraph
//! - `layout`: Position computation (circle layout)
//! - `render`: SVG figure generation via plotters
//! - `report`: Adjacency-list output
//! - `topology`: The hardcoded demo network

pub mod graph;
pub mod layout;
pub mod render;
pub mod report;
pub mod topology;

pub use graph::{EdgeKey, Network, NodeId};
pub use layout::{CircleConfig, CircleLayout};
pub use render::{render_network, FigureStats, FIGURE_TITLE};
pub use report::write_adjacency_list;
pub use topology::build_ring_network;
