//! Undirected edge keys.
//!
//! Every symmetric link is stored as two directed entries (A→B and B→A);
//! the renderer must not draw the same segment twice. `EdgeKey` normalizes
//! a slot pair to (min, max) so both directions hash to the same key.

use std::fmt;

/// Normalized undirected edge key over node slot indices.
///
/// `EdgeKey::new(4, 0) == EdgeKey::new(0, 4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    a: u32,
    b: u32,
}

impl EdgeKey {
    /// Create a key from two slot indices, in either order.
    #[inline]
    pub fn new(i: u32, j: u32) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// Get the (min, max) slot pair.
    #[inline]
    pub fn endpoints(self) -> (u32, u32) {
        (self.a, self.b)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
