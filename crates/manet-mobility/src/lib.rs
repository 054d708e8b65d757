//! `manet-mobility` — per-node movement state and the two movement models.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`heading`] | `Heading` — 8-way compass direction with clockwise turns |
//! | [`node`]    | `NodeState` — position, waypoint target, heading         |
//! | [`model`]   | `MobilityModel` — random-walk and waypoint stepping      |
//!
//! # Movement models
//!
//! Both models move at most one grid cell per axis per tick, gated by a
//! percent move probability:
//!
//! - **Persistent random walk** — the node keeps its heading two thirds of
//!   the time and resamples it otherwise, then takes one unit step.  A step
//!   that would leave the grid is clamped to the boundary and the heading
//!   turns one notch clockwise ("bounce and turn").
//! - **Waypoint pursuit** — the node walks one cell per axis toward a
//!   random destination, resampling a fresh destination on arrival.
//!   Manhattan-style pursuit, not straight-line travel.
//!
//! The model mutates [`NodeState`] in place and has no other side effects;
//! persisting positions is the stepper's job.

pub mod heading;
pub mod model;
pub mod node;


pub use heading::Heading;
pub use model::MobilityModel;
pub use node::{NodeState, scatter};
