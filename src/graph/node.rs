//! Node identity.
//!
//! Nodes are identified by their numeric label (1..=8 in the demo topology).
//! The label is the node's only payload: positions live in the network's
//! SoA buffers, adjacency in its per-slot neighbor lists.

use std::fmt;

/// Numeric node label.
///
/// Wraps a u32 for cheap copying and hashing. Labels are assigned by the
/// caller at construction time and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from a raw label.
    #[inline]
    pub fn new(label: u32) -> Self {
        Self(label)
    }

    /// Get the raw label value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bare label: the adjacency report prints "Node {label}: [..]".
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(label: u32) -> Self {
        Self(label)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(id.0, 5);
        assert_eq!(format!("{}", id), "5");
    }

    #[test]
    fn test_node_id_conversion() {
        let id: NodeId = 3.into();
        let raw: u32 = id.into();
        assert_eq!(raw, 3);
    }
}
