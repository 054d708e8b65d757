//! Simulation parameter set and its validation.
//!
//! All coordinates in the engine are integers in `1..=grid_size`; both the
//! mobility model and the stores rely on that range, so `validate` must run
//! before the first epoch.  The radio-range predicate is expressed as a
//! squared-distance comparison so no store backend ever touches floating
//! point.

use crate::{CoreError, CoreResult};

/// Global configuration consumed by the mobility engine.
///
/// Typically built in the application crate (literal, TOML, JSON — the
/// engine does not care) and passed to the stepper, which validates it once
/// at construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Side length of the square grid.  Valid coordinates are `1..=grid_size`.
    pub grid_size: i32,

    /// Percent chance (0–99) that a node attempts to move in a given tick.
    /// 0 disables movement entirely; contact ages still advance.
    pub move_probability: u32,

    /// Movement sub-steps per stepper epoch.  Must be positive.
    pub speed_max: u32,

    /// Maximum distance at which two nodes are in contact.  Non-negative.
    pub radio_range: i32,

    /// Number of nodes in the simulation.  Ids run `1..=node_count`.
    pub node_count: u32,

    /// `true` → waypoint pursuit; `false` → persistent random walk.
    pub waypoint: bool,
}

impl SimParams {
    /// Reject configurations the engine cannot run with.
    ///
    /// Called by the stepper before the first epoch; a failure here is
    /// final — there is nothing to retry.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_size <= 0 {
            return Err(CoreError::Config(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if self.move_probability > 99 {
            return Err(CoreError::Config(format!(
                "move_probability must be in 0..=99, got {}",
                self.move_probability
            )));
        }
        if self.speed_max == 0 {
            return Err(CoreError::Config("speed_max must be positive".into()));
        }
        if self.radio_range < 0 {
            return Err(CoreError::Config(format!(
                "radio_range must be non-negative, got {}",
                self.radio_range
            )));
        }
        if self.node_count == 0 {
            return Err(CoreError::Config("node_count must be positive".into()));
        }
        Ok(())
    }

    /// Squared radio range, for the store's distance predicate.
    #[inline]
    pub fn radio_range_sq(&self) -> i64 {
        i64::from(self.radio_range) * i64::from(self.radio_range)
    }
}
