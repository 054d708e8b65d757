//! Post-movement contact synchronization.

use manet_core::{NodeId, SimParams};
use manet_mobility::NodeState;
use manet_store::{StoreResult, TopologyStore};

/// Refresh the contact entries of one node against the committed positions
/// in the store.
///
/// Queries every id within radio range of the node (squared-distance
/// predicate, bounded by `node_count`) and resets the `(node, neighbor)`
/// entry for each — position rewritten to the node's own, both ages zeroed.
/// The node's own id comes back from the query at distance 0 and is
/// skipped.
///
/// One-sided on purpose: this pass rewrites only the entries owned by
/// `node`.  The reciprocal entries are refreshed when the neighbor's own
/// pass runs in the same sub-step, so a pair in range ends the sub-step
/// reset in both directions.
pub fn sync_contacts<S: TopologyStore>(
    node: &NodeState,
    params: &SimParams,
    store: &mut S,
) -> StoreResult<()> {
    let neighbors = store.query_neighbors(
        node.x,
        node.y,
        params.radio_range_sq(),
        NodeId(params.node_count),
    )?;
    for neighbor in neighbors {
        if neighbor == node.id {
            continue;
        }
        store.reset_contact(node.id, neighbor, node.x, node.y)?;
    }
    Ok(())
}
