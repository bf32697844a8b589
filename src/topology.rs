//! The fixed demo topology: an 8-node ring with two long-range links.

use crate::graph::Network;

/// Number of nodes in the demo network.
pub const NODE_COUNT: usize = 8;

/// Long-range links as slot pairs, added after the ring connections.
pub const LONG_LINKS: [(usize, usize); 2] = [(0, 4), (2, 6)];

/// Build the demo network: nodes labeled 1..=8, each connected to its
/// ring successor, plus the long-range links.
///
/// Connection order matters: the adjacency report prints neighbor labels in
/// insertion order, so the ring pass runs first (forward entry, then the
/// reciprocal), followed by the long-range links.
pub fn build_ring_network() -> Network {
    let mut network = Network::with_capacity(NODE_COUNT, (NODE_COUNT + LONG_LINKS.len()) * 2);

    let ids: Vec<_> = (1..=NODE_COUNT as u32)
        .map(|label| network.add_node(label))
        .collect();

    for i in 0..NODE_COUNT {
        network.connect(ids[i], ids[(i + 1) % NODE_COUNT]);
    }

    for (i, j) in LONG_LINKS {
        network.connect(ids[i], ids[j]);
    }

    network
}
