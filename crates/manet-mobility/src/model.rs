//! The per-tick movement decision.

use manet_core::{RandomSource, SimParams};

use crate::{Heading, NodeState};

/// Percent chance the random walk keeps its current heading on a moving
/// tick.  Two thirds keeps trajectories from jittering unrealistically.
const HEADING_HOLD_PCT: u32 = 67;

/// Applies one movement tick to a node.
///
/// Carries only the movement-relevant parameters, copied out of
/// [`SimParams`] at construction.  `step` mutates the node in place and
/// nothing else — persistence and neighbor bookkeeping belong to the
/// stepper.
#[derive(Clone, Debug)]
pub struct MobilityModel {
    grid_size: i32,
    move_probability: u32,
    waypoint: bool,
}

impl MobilityModel {
    pub fn from_params(params: &SimParams) -> Self {
        Self {
            grid_size: params.grid_size,
            move_probability: params.move_probability,
            waypoint: params.waypoint,
        }
    }

    /// Decide whether the node moves this tick and update it in place.
    pub fn step<R: RandomSource>(&self, node: &mut NodeState, rng: &mut R) {
        if rng.draw(100) >= self.move_probability {
            return;
        }
        if self.waypoint {
            self.step_waypoint(node, rng);
        } else {
            self.step_random_walk(node, rng);
        }
    }

    /// One unit step per axis toward the waypoint target, resampling a new
    /// target when the node stands on the current one.
    ///
    /// The fresh target may land on the node's own position; it then walks
    /// zero cells this tick and resamples again next time it is picked.
    fn step_waypoint<R: RandomSource>(&self, node: &mut NodeState, rng: &mut R) {
        if node.x == node.target_x && node.y == node.target_y {
            node.target_x = rng.draw(self.grid_size as u32) as i32 + 1;
            node.target_y = rng.draw(self.grid_size as u32) as i32 + 1;
        }

        if node.x < node.target_x {
            node.x += 1;
        } else if node.x > node.target_x {
            node.x -= 1;
        }

        if node.y < node.target_y {
            node.y += 1;
        } else if node.y > node.target_y {
            node.y -= 1;
        }
    }

    /// Inertial random walk with the clamp-and-turn boundary policy.
    ///
    /// The heading is held two thirds of the time, resampled otherwise,
    /// then one unit step is taken along it.  An axis that would leave
    /// `1..=grid_size` is clamped to the violated edge and the heading
    /// turns one notch clockwise.  The x axis is evaluated before the y
    /// axis and the later turn overwrites the earlier one; both turns
    /// rotate the heading that was in effect this tick, so a diagonal
    /// clamped on both axes still ends one notch over.  This ordering is
    /// load-bearing for the long-run direction distribution — keep it.
    fn step_random_walk<R: RandomSource>(&self, node: &mut NodeState, rng: &mut R) {
        if rng.draw(100) >= HEADING_HOLD_PCT {
            node.heading = Heading::sample(rng);
        }

        let heading = node.heading;
        let (dx, dy) = heading.unit_step();

        if dx != 0 {
            let nx = node.x + dx;
            if nx < 1 {
                node.x = 1;
                node.heading = heading.rotated_cw();
            } else if nx > self.grid_size {
                node.x = self.grid_size;
                node.heading = heading.rotated_cw();
            } else {
                node.x = nx;
            }
        }

        if dy != 0 {
            let ny = node.y + dy;
            if ny < 1 {
                node.y = 1;
                node.heading = heading.rotated_cw();
            } else if ny > self.grid_size {
                node.y = self.grid_size;
                node.heading = heading.rotated_cw();
            } else {
                node.y = ny;
            }
        }
    }
}
