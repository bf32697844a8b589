//! Adjacency-list reporting.

use std::io::{self, Write};

use crate::graph::Network;

/// Write the adjacency list to `out`.
///
/// One header line, then one line per node in insertion order. Neighbor
/// labels appear in the order their entries were added during construction,
/// never sorted.
pub fn write_adjacency_list<W: Write>(network: &Network, out: &mut W) -> io::Result<()> {
    writeln!(out, "Adjacency list:")?;
    for id in network.nodes() {
        let labels: Vec<u32> = network.neighbors(id).iter().map(|n| n.raw()).collect();
        writeln!(out, "Node {}: {:?}", id, labels)?;
    }
    Ok(())
}
