//! Layout algorithms for graph visualization.
//!
//! This module provides CPU-side layout algorithms that compute target
//! positions for nodes. The results are applied to the network's position
//! buffers before rendering.

pub mod circle;

pub use circle::{CircleConfig, CircleLayout, CircleResult};
