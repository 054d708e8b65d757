//! `manet-store` — the persistent topology store behind the mobility engine.
//!
//! The engine never builds query text; everything it needs from persistent
//! state is the four operations of [`TopologyStore`].  That keeps the
//! movement algorithms store-agnostic and testable against an in-memory
//! fake.
//!
//! # Backends
//!
//! | Type            | Backing                                                          |
//! |-----------------|------------------------------------------------------------------|
//! | [`MemoryStore`] | `BTreeMap`s — tests and store-less runs                          |
//! | [`SqliteStore`] | SQLite via `rusqlite` — shared with the protocol simulator       |
//!
//! Store failures are fatal to the engine: in-memory node state and store
//! state would diverge under partial recovery, so the stepper aborts the
//! epoch on the first error.

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;


pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{ContactEntry, TopologyStore};
