//! Network - the core graph data structure.
//!
//! The Network stores the topology in petgraph's StableGraph and keeps
//! SoA (Structure of Arrays) position buffers plus per-slot neighbor lists
//! alongside it. The neighbor lists preserve directed-entry insertion order,
//! which the adjacency report depends on and which petgraph's own adjacency
//! walk does not provide.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;
use std::collections::{BTreeSet, HashMap};

use super::edge::EdgeKey;
use super::node::NodeId;

/// A small labeled graph with 2D node positions.
///
/// This struct manages:
/// - Graph topology via petgraph (directed; a symmetric link is two entries)
/// - Position buffers in SoA layout, written by the layout stage
/// - Per-slot neighbor lists in insertion order
/// - Mapping between node labels and internal slot indices
///
/// The graph is built once and never shrinks: there is no node or edge
/// removal, so petgraph indices are dense and double as slot indices.
pub struct Network {
    /// The underlying graph structure. Nodes store their label.
    graph: StableGraph<NodeId, (), Directed>,

    /// Map from node label to petgraph NodeIndex.
    node_id_to_index: HashMap<NodeId, NodeIndex>,

    /// Node labels in insertion order, indexed by slot.
    order: Vec<NodeId>,

    /// Neighbor labels per slot, one entry per directed insertion.
    adjacency: Vec<Vec<NodeId>>,

    /// X positions (SoA layout).
    pos_x: Vec<f32>,

    /// Y positions (SoA layout).
    pos_y: Vec<f32>,
}

impl Network {
    /// Create a new empty network.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_id_to_index: HashMap::new(),
            order: Vec::new(),
            adjacency: Vec::new(),
            pos_x: Vec::new(),
            pos_y: Vec::new(),
        }
    }

    /// Create a network with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: StableGraph::with_capacity(node_capacity, edge_capacity),
            node_id_to_index: HashMap::with_capacity(node_capacity),
            order: Vec::with_capacity(node_capacity),
            adjacency: Vec::with_capacity(node_capacity),
            pos_x: Vec::with_capacity(node_capacity),
            pos_y: Vec::with_capacity(node_capacity),
        }
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Add a node with the given label at the origin.
    ///
    /// Labels must be unique within the network.
    pub fn add_node(&mut self, label: u32) -> NodeId {
        let id = NodeId(label);
        assert!(
            !self.node_id_to_index.contains_key(&id),
            "duplicate node label {label}"
        );

        let index = self.graph.add_node(id);
        self.node_id_to_index.insert(id, index);

        self.order.push(id);
        self.adjacency.push(Vec::new());
        self.pos_x.push(0.0);
        self.pos_y.push(0.0);

        id
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Iterate over node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Get a node's slot index (its position in insertion order).
    pub fn slot_of(&self, id: NodeId) -> Option<usize> {
        self.node_id_to_index.get(&id).map(|index| index.index())
    }

    /// Get a node's position.
    pub fn position(&self, id: NodeId) -> Option<(f32, f32)> {
        self.node_id_to_index.get(&id).map(|&index| {
            let i = index.index();
            (self.pos_x[i], self.pos_y[i])
        })
    }

    /// Set a node's position.
    pub fn set_node_position(&mut self, id: NodeId, x: f32, y: f32) {
        if let Some(&index) = self.node_id_to_index.get(&id) {
            let i = index.index();
            self.pos_x[i] = x;
            self.pos_y[i] = y;
        }
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    /// Add a single directed neighbor entry from `source` to `target`.
    ///
    /// Returns false if either endpoint does not exist.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        let (Some(&source_index), Some(&target_index)) = (
            self.node_id_to_index.get(&source),
            self.node_id_to_index.get(&target),
        ) else {
            return false;
        };

        self.graph.add_edge(source_index, target_index, ());
        self.adjacency[source_index.index()].push(target);
        true
    }

    /// Connect two nodes symmetrically: entry a→b, then entry b→a.
    ///
    /// Symmetry is only ever established here, at construction time.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> bool {
        self.add_edge(a, b) && self.add_edge(b, a)
    }

    /// Get the number of directed neighbor entries.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get a node's neighbor labels in insertion order.
    ///
    /// Returns an empty slice for an unknown label.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node_id_to_index
            .get(&id)
            .map(|&index| self.adjacency[index.index()].as_slice())
            .unwrap_or(&[])
    }

    /// Collect the distinct undirected edges as normalized slot pairs.
    pub fn undirected_edges(&self) -> BTreeSet<EdgeKey> {
        let mut edges = BTreeSet::new();
        for (slot, neighbors) in self.adjacency.iter().enumerate() {
            for neighbor in neighbors {
                if let Some(other) = self.slot_of(*neighbor) {
                    edges.insert(EdgeKey::new(slot as u32, other as u32));
                }
            }
        }
        edges
    }

    // =========================================================================
    // Buffer Access
    // =========================================================================

    /// Get X positions slice.
    pub fn positions_x(&self) -> &[f32] {
        &self.pos_x
    }

    /// Get Y positions slice.
    pub fn positions_y(&self) -> &[f32] {
        &self.pos_y
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
