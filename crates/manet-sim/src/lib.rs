//! `manet-sim` — the epoch stepper driving the mobility engine.
//!
//! # One epoch
//!
//! ```text
//! run_epoch:
//!   ① Age      — one global contact-age increment (even when movement
//!                is disabled).
//!   ② Sub-steps — speed_max times, skipped if move_probability == 0:
//!        a. Move    — every node in collection order: mobility model,
//!                     then persist the new position.
//!        b. Contacts — every node in collection order: neighbor query,
//!                     then reset the contact ages of each pair found.
//!   The two passes never interleave: every position of the sub-step is
//!   committed before the first neighbor query runs.
//! ```
//!
//! The engine is single-threaded and synchronous; the only ordering
//! guarantees over the store are the ones above, and the first store error
//! aborts the epoch (position state and store state would diverge under
//! partial recovery).

pub mod error;
pub mod observer;
pub mod stepper;
pub mod sync;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StepObserver};
pub use stepper::Stepper;
pub use sync::sync_contacts;
