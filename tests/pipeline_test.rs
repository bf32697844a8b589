//! Integration tests for ring-network.
//!
//! Runs the full construct → layout → render → report pipeline and verifies
//! the observable contract: the fixed edge set, unit-circle positions, the
//! drawn primitive counts, and the exact adjacency report.

use ring_network::graph::{EdgeKey, NodeId};
use ring_network::layout::CircleLayout;
use ring_network::render::{render_network, FIGURE_TITLE};
use ring_network::report::write_adjacency_list;
use ring_network::topology::{build_ring_network, NODE_COUNT};
use tempfile::TempDir;

#[test]
fn full_pipeline() {
    let mut network = build_ring_network();
    assert_eq!(network.node_count(), NODE_COUNT);

    // Layout: all positions on the unit circle.
    let layout = CircleLayout::default().compute(network.node_count());
    let ids: Vec<_> = network.nodes().collect();
    for (i, id) in ids.into_iter().enumerate() {
        network.set_node_position(id, layout.positions_x[i], layout.positions_y[i]);
    }

    for id in network.nodes().collect::<Vec<_>>() {
        let (x, y) = network.position(id).unwrap();
        assert!(
            (x * x + y * y - 1.0).abs() < 1e-5,
            "node {id} off the unit circle: ({x}, {y})"
        );
    }

    // Render: 10 distinct segments, 8 markers, a real SVG with the title.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("network.svg");
    let stats = render_network(&path, &network).unwrap();
    assert_eq!(stats.edges_drawn, 10);
    assert_eq!(stats.nodes_drawn, 8);

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains(FIGURE_TITLE));

    // Report: byte-exact adjacency list.
    let mut out = Vec::new();
    write_adjacency_list(&network, &mut out).unwrap();
    let expected = "\
Adjacency list:
Node 1: [2, 8, 5]
Node 2: [1, 3]
Node 3: [2, 4, 7]
Node 4: [3, 5]
Node 5: [4, 6, 1]
Node 6: [5, 7]
Node 7: [6, 8, 3]
Node 8: [7, 1]
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn edge_set_is_ring_plus_long_links() {
    let network = build_ring_network();

    let expected: Vec<EdgeKey> = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 0),
        (0, 4),
        (2, 6),
    ]
    .into_iter()
    .map(|(i, j)| EdgeKey::new(i, j))
    .collect();

    let edges = network.undirected_edges();
    assert_eq!(edges.len(), expected.len());
    for key in expected {
        assert!(edges.contains(&key), "missing edge {key}");
    }
}

#[test]
fn node_one_neighbor_set() {
    let network = build_ring_network();
    let labels: Vec<u32> = network
        .neighbors(NodeId::new(1))
        .iter()
        .map(|n| n.raw())
        .collect();
    assert_eq!(labels, vec![2, 8, 5]);
}

#[test]
fn construction_is_deterministic() {
    let a = build_ring_network();
    let b = build_ring_network();

    assert_eq!(a.undirected_edges(), b.undirected_edges());
    for id in a.nodes().collect::<Vec<_>>() {
        assert_eq!(a.neighbors(id), b.neighbors(id));
    }
}
