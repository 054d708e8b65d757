//! Per-node mutable state.

use manet_core::{NodeId, RandomSource, SimParams};

use crate::Heading;

/// The in-memory state of one mobile node.
///
/// Positions are integers in `1..=grid_size`.  The waypoint target is only
/// meaningful in waypoint mode; the heading only drives the random walk.
/// Both persist across ticks regardless, so switching models mid-run is
/// harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    pub id: NodeId,
    pub x: i32,
    pub y: i32,
    /// Waypoint destination.  Initialised to the starting position so the
    /// first waypoint move resamples a fresh target.
    pub target_x: i32,
    pub target_y: i32,
    /// Direction held across ticks — the random walk's inertia.
    pub heading: Heading,
}

impl NodeState {
    /// A node standing at `(x, y)` with its waypoint target on itself.
    pub fn at(id: NodeId, x: i32, y: i32) -> Self {
        Self {
            id,
            x,
            y,
            target_x: x,
            target_y: y,
            heading: Heading::North,
        }
    }
}

/// Place `node_count` nodes uniformly at random on the grid, ids
/// `1..=node_count` in collection order.
pub fn scatter<R: RandomSource>(params: &SimParams, rng: &mut R) -> Vec<NodeState> {
    let grid = params.grid_size as u32;
    (1..=params.node_count)
        .map(|id| {
            let x = rng.draw(grid) as i32 + 1;
            let y = rng.draw(grid) as i32 + 1;
            NodeState::at(NodeId(id), x, y)
        })
        .collect()
}
