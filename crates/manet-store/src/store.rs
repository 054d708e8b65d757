//! The `TopologyStore` trait and contact-entry row type.

use manet_core::NodeId;

use crate::StoreResult;

/// One row of per-pair contact bookkeeping, keyed by `(owner, neighbor)`.
///
/// Holds the owner's last position as recorded for that pair — a live copy
/// and a `pdl` shadow copy consumed by the delivery protocol — plus the two
/// age counters ticking since the pair last met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub x: i32,
    pub y: i32,
    pub x_pdl: i32,
    pub y_pdl: i32,
    /// Epochs since last contact.
    pub age: u64,
    /// Delivery-protocol copy of the age counter; same cadence.
    pub age_pdl: u64,
}

impl ContactEntry {
    /// A fresh entry at `(x, y)` with both counters at zero.
    pub fn fresh(x: i32, y: i32) -> Self {
        Self { x, y, x_pdl: x, y_pdl: y, age: 0, age_pdl: 0 }
    }
}

/// The four operations the mobility engine requires of persistent topology
/// state.  Id bounds are inclusive; distance predicates compare squared
/// distances, never floats.
pub trait TopologyStore {
    /// Advance both age counters by one for every entry with
    /// `owner != neighbor` and `owner <= max_id`.  Called exactly once per
    /// stepper epoch, before any movement.
    fn increment_contact_ages(&mut self, max_id: NodeId) -> StoreResult<()>;

    /// Upsert a node's authoritative position.
    fn update_node_position(&mut self, node: NodeId, x: i32, y: i32) -> StoreResult<()>;

    /// Ids `<= max_id` whose stored position lies within `radius_sq` of
    /// `(x, y)` (squared Euclidean, inclusive), ascending.  The querying
    /// node's own id is included when its position qualifies.
    fn query_neighbors(
        &mut self,
        x: i32,
        y: i32,
        radius_sq: i64,
        max_id: NodeId,
    ) -> StoreResult<Vec<NodeId>>;

    /// Record a contact: set the `(owner, neighbor)` entry's position (both
    /// copies) to `(x, y)` and zero both age counters.  A pair with no
    /// existing entry is left absent.
    fn reset_contact(
        &mut self,
        owner: NodeId,
        neighbor: NodeId,
        x: i32,
        y: i32,
    ) -> StoreResult<()>;
}
