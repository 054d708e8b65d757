//! `manet-core` — foundational types for the manet mobility engine.
//!
//! This crate is a dependency of every other `manet-*` crate.  It has no
//! `manet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `NodeId`                                         |
//! | [`params`] | `SimParams` and its validation                   |
//! | [`rng`]    | `RandomSource`, `DeviceEntropy`, `SeededEntropy` |
//! | [`error`]  | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::NodeId;
pub use params::SimParams;
pub use rng::{DeviceEntropy, RandomSource, SeededEntropy};
