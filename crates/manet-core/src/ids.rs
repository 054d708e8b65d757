//! Strongly typed node identifier.
//!
//! Node ids are issued by the topology generator starting at 1 and stay
//! stable for the whole run.  The inner integer is `pub` so stores can bind
//! it directly into query parameters, but callers should prefer the helper
//! methods for clarity.

use std::fmt;

/// Identity of a simulated mobile node.  Ids are 1-based and unique.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel below every real id (real ids start at 1).
    pub const ZERO: NodeId = NodeId(0);

    /// Cast to `usize`, e.g. for indexing a parallel `Vec`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
