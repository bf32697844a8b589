//! Circle layout: evenly spaced positions on a circle.
//!
//! Places node slot i at angle 2π·i/n on a circle of the configured radius.
//! Deterministic and a pure function of the slot index; the long-range links
//! in the demo topology are hardcoded, so nothing here is randomized.

use std::f32::consts::TAU;

/// Configuration for the circle layout.
pub struct CircleConfig {
    /// Circle radius (default: 1.0, the unit circle).
    pub radius: f32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

/// Result of a circle layout computation.
pub struct CircleResult {
    /// X positions, one per node slot.
    pub positions_x: Vec<f32>,
    /// Y positions, one per node slot.
    pub positions_y: Vec<f32>,
}

/// Circle layout algorithm.
pub struct CircleLayout {
    config: CircleConfig,
}

impl CircleLayout {
    /// Create a layout with the given configuration.
    pub fn new(config: CircleConfig) -> Self {
        Self { config }
    }

    /// Compute positions for `node_count` slots.
    ///
    /// Slot i lands at (r·cos θ_i, r·sin θ_i) with θ_i = 2π·i/n, so slot 0
    /// sits at (r, 0) and angles increase counter-clockwise.
    pub fn compute(&self, node_count: usize) -> CircleResult {
        let mut positions_x = Vec::with_capacity(node_count);
        let mut positions_y = Vec::with_capacity(node_count);

        for i in 0..node_count {
            let angle = TAU * i as f32 / node_count as f32;
            positions_x.push(self.config.radius * angle.cos());
            positions_y.push(self.config.radius * angle.sin());
        }

        CircleResult {
            positions_x,
            positions_y,
        }
    }
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self::new(CircleConfig::default())
    }
}
