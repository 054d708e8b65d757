//! SQLite topology store backend.
//!
//! The database is the hand-off point to the protocol simulator that
//! consumes the topology, so the schema keeps the two-table shape it
//! expects: `nodes` for authoritative positions and `contacts` for the
//! per-pair bookkeeping (live position, `pdl` shadow position, two age
//! counters).

use std::path::Path;

use manet_core::NodeId;
use rusqlite::Connection;

use crate::store::{ContactEntry, TopologyStore};
use crate::StoreResult;

const SCHEMA: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous  = NORMAL;
    CREATE TABLE IF NOT EXISTS nodes (
        id    INTEGER PRIMARY KEY,
        pos_x INTEGER NOT NULL,
        pos_y INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS contacts (
        owner_id    INTEGER NOT NULL,
        neighbor_id INTEGER NOT NULL,
        pos_x       INTEGER NOT NULL,
        pos_y       INTEGER NOT NULL,
        pos_x_pdl   INTEGER NOT NULL,
        pos_y_pdl   INTEGER NOT NULL,
        age         INTEGER NOT NULL,
        age_pdl     INTEGER NOT NULL,
        PRIMARY KEY (owner_id, neighbor_id)
    );";

/// Topology store backed by an SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // ── Seeding ───────────────────────────────────────────────────────────

    /// Record a node's starting position.
    pub fn seed_node(&mut self, node: NodeId, x: i32, y: i32) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO nodes (id, pos_x, pos_y) VALUES (?1, ?2, ?3)",
            rusqlite::params![node.0, x, y],
        )?;
        Ok(())
    }

    /// Create one contact entry with both counters at zero.
    pub fn seed_contact(
        &mut self,
        owner: NodeId,
        neighbor: NodeId,
        x: i32,
        y: i32,
    ) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO contacts \
             (owner_id, neighbor_id, pos_x, pos_y, pos_x_pdl, pos_y_pdl, age, age_pdl) \
             VALUES (?1, ?2, ?3, ?4, ?3, ?4, 0, 0)",
            rusqlite::params![owner.0, neighbor.0, x, y],
        )?;
        Ok(())
    }

    /// Seed node positions plus a contact entry for every ordered pair,
    /// self-pairs included, inside one transaction.
    pub fn seed_full_mesh(&mut self, positions: &[(NodeId, i32, i32)]) -> StoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut node_stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO nodes (id, pos_x, pos_y) VALUES (?1, ?2, ?3)",
            )?;
            let mut contact_stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO contacts \
                 (owner_id, neighbor_id, pos_x, pos_y, pos_x_pdl, pos_y_pdl, age, age_pdl) \
                 VALUES (?1, ?2, ?3, ?4, ?3, ?4, 0, 0)",
            )?;
            for &(id, x, y) in positions {
                node_stmt.execute(rusqlite::params![id.0, x, y])?;
                for &(neighbor, _, _) in positions {
                    contact_stmt.execute(rusqlite::params![id.0, neighbor.0, x, y])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn position(&self, node: NodeId) -> StoreResult<Option<(i32, i32)>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT pos_x, pos_y FROM nodes WHERE id = ?1")?;
        let mut rows = stmt.query(rusqlite::params![node.0])?;
        match rows.next()? {
            Some(row) => Ok(Some((row.get(0)?, row.get(1)?))),
            None => Ok(None),
        }
    }

    pub fn contact(&self, owner: NodeId, neighbor: NodeId) -> StoreResult<Option<ContactEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT pos_x, pos_y, pos_x_pdl, pos_y_pdl, age, age_pdl \
             FROM contacts WHERE owner_id = ?1 AND neighbor_id = ?2",
        )?;
        let mut rows = stmt.query(rusqlite::params![owner.0, neighbor.0])?;
        match rows.next()? {
            Some(row) => Ok(Some(ContactEntry {
                x: row.get(0)?,
                y: row.get(1)?,
                x_pdl: row.get(2)?,
                y_pdl: row.get(3)?,
                age: row.get::<_, i64>(4)? as u64,
                age_pdl: row.get::<_, i64>(5)? as u64,
            })),
            None => Ok(None),
        }
    }
}

impl TopologyStore for SqliteStore {
    fn increment_contact_ages(&mut self, max_id: NodeId) -> StoreResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "UPDATE contacts SET age = age + 1, age_pdl = age_pdl + 1 \
             WHERE owner_id <= ?1 AND owner_id != neighbor_id",
        )?;
        stmt.execute(rusqlite::params![max_id.0])?;
        Ok(())
    }

    fn update_node_position(&mut self, node: NodeId, x: i32, y: i32) -> StoreResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO nodes (id, pos_x, pos_y) VALUES (?1, ?2, ?3) \
             ON CONFLICT (id) DO UPDATE SET pos_x = ?2, pos_y = ?3",
        )?;
        stmt.execute(rusqlite::params![node.0, x, y])?;
        Ok(())
    }

    fn query_neighbors(
        &mut self,
        x: i32,
        y: i32,
        radius_sq: i64,
        max_id: NodeId,
    ) -> StoreResult<Vec<NodeId>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id FROM nodes \
             WHERE (pos_x - ?1) * (pos_x - ?1) + (pos_y - ?2) * (pos_y - ?2) <= ?3 \
               AND id <= ?4 \
             ORDER BY id",
        )?;
        let ids = stmt
            .query_map(rusqlite::params![x, y, radius_sq, max_id.0], |row| {
                row.get::<_, u32>(0).map(NodeId)
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    fn reset_contact(
        &mut self,
        owner: NodeId,
        neighbor: NodeId,
        x: i32,
        y: i32,
    ) -> StoreResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "UPDATE contacts SET pos_x = ?3, pos_y = ?4, age = 0, \
                                 pos_x_pdl = ?3, pos_y_pdl = ?4, age_pdl = 0 \
             WHERE owner_id = ?1 AND neighbor_id = ?2",
        )?;
        stmt.execute(rusqlite::params![owner.0, neighbor.0, x, y])?;
        Ok(())
    }
}
