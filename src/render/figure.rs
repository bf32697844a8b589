//! Figure generation using plotters (SVG output).
//!
//! Uses the SVG backend to avoid system font and display dependencies.

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use plotters_svg::SVGBackend;
use std::collections::HashSet;
use std::path::Path;

use crate::graph::{EdgeKey, Network};

/// Fixed figure caption.
pub const FIGURE_TITLE: &str = "Simple Node Network (ring + long links)";

/// Matplotlib's default series blue, for node markers.
const NODE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Edge segment color.
const EDGE_COLOR: RGBColor = RGBColor(120, 120, 120);

/// Square canvas size in pixels. Equal aspect comes from the square canvas
/// plus symmetric coordinate ranges.
const CANVAS_SIZE: u32 = 600;

/// Symmetric coordinate range half-width; leaves a margin around the
/// unit circle so markers and labels are not clipped.
const VIEW_EXTENT: f32 = 1.3;

/// Counts of primitives actually drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureStats {
    /// Distinct undirected edge segments drawn.
    pub edges_drawn: usize,
    /// Node markers drawn.
    pub nodes_drawn: usize,
}

/// Render the network to an SVG figure at `path`.
///
/// Draws every distinct undirected edge as a line segment (each symmetric
/// link is stored as two directed entries; a drawn-key set keeps the second
/// entry from producing a duplicate segment), then draws each node as a
/// filled marker with its label centered on top. No axes are drawn.
pub fn render_network(path: &Path, network: &Network) -> Result<FigureStats> {
    let root = SVGBackend::new(path, (CANVAS_SIZE, CANVAS_SIZE)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(FIGURE_TITLE, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_2d(-VIEW_EXTENT..VIEW_EXTENT, -VIEW_EXTENT..VIEW_EXTENT)?;

    // Edges first, so markers paint over the segment endpoints.
    let mut drawn: HashSet<EdgeKey> = HashSet::new();
    let mut edges_drawn = 0;

    for id in network.nodes() {
        let Some(i) = network.slot_of(id) else {
            continue;
        };
        let Some((x1, y1)) = network.position(id) else {
            continue;
        };

        for &neighbor in network.neighbors(id) {
            let Some(j) = network.slot_of(neighbor) else {
                continue;
            };
            if !drawn.insert(EdgeKey::new(i as u32, j as u32)) {
                continue;
            }
            let Some((x2, y2)) = network.position(neighbor) else {
                continue;
            };

            chart.draw_series(LineSeries::new([(x1, y1), (x2, y2)], &EDGE_COLOR))?;
            edges_drawn += 1;
        }
    }

    let mut nodes_drawn = 0;
    let label_style = ("sans-serif", 16)
        .into_font()
        .style(FontStyle::Bold)
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for id in network.nodes() {
        let Some((x, y)) = network.position(id) else {
            continue;
        };

        chart.draw_series(std::iter::once(Circle::new(
            (x, y),
            12,
            NODE_COLOR.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            id.to_string(),
            (x, y),
            label_style.clone(),
        )))?;
        nodes_drawn += 1;
    }

    root.present()?;

    Ok(FigureStats {
        edges_drawn,
        nodes_drawn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::build_ring_network;
    use crate::layout::CircleLayout;
    use tempfile::TempDir;

    fn laid_out_network() -> Network {
        let mut network = build_ring_network();
        let result = CircleLayout::default().compute(network.node_count());
        let ids: Vec<_> = network.nodes().collect();
        for (i, id) in ids.into_iter().enumerate() {
            network.set_node_position(id, result.positions_x[i], result.positions_y[i]);
        }
        network
    }

    #[test]
    fn test_render_counts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("network.svg");

        let network = laid_out_network();
        let stats = render_network(&path, &network).unwrap();

        // 8 ring edges + 2 long-range links, each stored twice but drawn once.
        assert_eq!(stats.edges_drawn, 10);
        assert_eq!(stats.nodes_drawn, 8);
    }

    #[test]
    fn test_render_writes_svg_with_title() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("network.svg");

        let network = laid_out_network();
        render_network(&path, &network).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(FIGURE_TITLE));
    }

    #[test]
    fn test_render_empty_network() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.svg");

        let stats = render_network(&path, &Network::new()).unwrap();
        assert_eq!(stats.edges_drawn, 0);
        assert_eq!(stats.nodes_drawn, 0);
        assert!(path.exists());
    }
}
