//! Typed node index.
//!
//! A node's index is its position in the simulation's node list.  It is
//! reassigned every time the node list or dimension count is replaced, so
//! it is never a stable identity across re-registration.

use std::fmt;

/// Position of a node in the simulation's ordered node list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for a node that has not been through initialization yet.
    pub const INVALID: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for NodeIndex {
    /// Returns the `INVALID` sentinel so uninitialized nodes are visibly unindexed.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl TryFrom<usize> for NodeIndex {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeIndex, Self::Error> {
        u32::try_from(n).map(NodeIndex)
    }
}
