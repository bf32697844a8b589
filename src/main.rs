//! Binary entry point: construct → layout → render → report.

use anyhow::Result;
use std::io;
use std::path::Path;

use ring_network::layout::CircleLayout;
use ring_network::render::render_network;
use ring_network::report::write_adjacency_list;
use ring_network::topology::build_ring_network;

/// Output figure path, relative to the working directory.
const FIGURE_PATH: &str = "network.svg";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut network = build_ring_network();
    log::info!(
        "Built network: {} nodes, {} directed entries",
        network.node_count(),
        network.edge_count()
    );

    let layout = CircleLayout::default().compute(network.node_count());
    let ids: Vec<_> = network.nodes().collect();
    for (i, id) in ids.into_iter().enumerate() {
        network.set_node_position(id, layout.positions_x[i], layout.positions_y[i]);
    }

    let stats = render_network(Path::new(FIGURE_PATH), &network)?;
    log::info!(
        "Wrote {FIGURE_PATH}: {} edges, {} nodes",
        stats.edges_drawn,
        stats.nodes_drawn
    );

    write_adjacency_list(&network, &mut io::stdout().lock())?;

    Ok(())
}
