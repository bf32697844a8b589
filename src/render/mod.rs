//! Figure rendering.

mod figure;

pub use figure::{render_network, FigureStats, FIGURE_TITLE};
