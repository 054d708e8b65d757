//! In-memory topology store.
//!
//! The reference backend: tests run against it, and the engine can run
//! store-less simulations with it.  `BTreeMap`s keep iteration (and thus
//! neighbor-query results) in ascending id order.

use std::collections::BTreeMap;

use manet_core::NodeId;

use crate::store::{ContactEntry, TopologyStore};
use crate::StoreResult;

/// Topology state held entirely in process memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    positions: BTreeMap<NodeId, (i32, i32)>,
    contacts: BTreeMap<(NodeId, NodeId), ContactEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding ───────────────────────────────────────────────────────────

    /// Record a node's starting position.
    pub fn seed_node(&mut self, node: NodeId, x: i32, y: i32) {
        self.positions.insert(node, (x, y));
    }

    /// Create one contact entry with both counters at zero.
    pub fn seed_contact(&mut self, owner: NodeId, neighbor: NodeId, x: i32, y: i32) {
        self.contacts.insert((owner, neighbor), ContactEntry::fresh(x, y));
    }

    /// Seed node positions plus a contact entry for every ordered pair,
    /// self-pairs included — the shape the topology generator produces.
    pub fn seed_full_mesh(&mut self, positions: &[(NodeId, i32, i32)]) {
        for &(id, x, y) in positions {
            self.seed_node(id, x, y);
        }
        for &(owner, x, y) in positions {
            for &(neighbor, _, _) in positions {
                self.seed_contact(owner, neighbor, x, y);
            }
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn position(&self, node: NodeId) -> Option<(i32, i32)> {
        self.positions.get(&node).copied()
    }

    pub fn contact(&self, owner: NodeId, neighbor: NodeId) -> Option<&ContactEntry> {
        self.contacts.get(&(owner, neighbor))
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }
}

impl TopologyStore for MemoryStore {
    fn increment_contact_ages(&mut self, max_id: NodeId) -> StoreResult<()> {
        for (&(owner, neighbor), entry) in self.contacts.iter_mut() {
            if owner != neighbor && owner <= max_id {
                entry.age += 1;
                entry.age_pdl += 1;
            }
        }
        Ok(())
    }

    fn update_node_position(&mut self, node: NodeId, x: i32, y: i32) -> StoreResult<()> {
        self.positions.insert(node, (x, y));
        Ok(())
    }

    fn query_neighbors(
        &mut self,
        x: i32,
        y: i32,
        radius_sq: i64,
        max_id: NodeId,
    ) -> StoreResult<Vec<NodeId>> {
        let ids = self
            .positions
            .range(..=max_id)
            .filter(|&(_, &(px, py))| {
                let dx = i64::from(px - x);
                let dy = i64::from(py - y);
                dx * dx + dy * dy <= radius_sq
            })
            .map(|(&id, _)| id)
            .collect();
        Ok(ids)
    }

    fn reset_contact(
        &mut self,
        owner: NodeId,
        neighbor: NodeId,
        x: i32,
        y: i32,
    ) -> StoreResult<()> {
        if let Some(entry) = self.contacts.get_mut(&(owner, neighbor)) {
            *entry = ContactEntry::fresh(x, y);
        }
        Ok(())
    }
}
