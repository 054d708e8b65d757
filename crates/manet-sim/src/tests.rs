//! Integration tests for manet-sim.

use manet_core::{NodeId, SeededEntropy, SimParams};
use manet_mobility::{NodeState, scatter};
use manet_store::{MemoryStore, StoreError, StoreResult, TopologyStore};

use crate::{NoopObserver, SimError, StepObserver, Stepper};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_params(grid_size: i32, move_probability: u32, node_count: u32) -> SimParams {
    SimParams {
        grid_size,
        move_probability,
        speed_max: 1,
        radio_range: 2,
        node_count,
        waypoint: false,
    }
}

/// Seed a memory store to match a node collection, full contact mesh.
fn seeded_store(nodes: &[NodeState]) -> MemoryStore {
    let mut store = MemoryStore::new();
    let positions: Vec<_> = nodes.iter().map(|n| (n.id, n.x, n.y)).collect();
    store.seed_full_mesh(&positions);
    store
}

/// The store call sequence, for ordering and no-call assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Age,
    UpdatePosition,
    QueryNeighbors,
    ResetContact,
}

/// A `MemoryStore` wrapper that logs every operation it receives.
struct RecordingStore {
    inner: MemoryStore,
    log: Vec<Op>,
}

impl RecordingStore {
    fn new(inner: MemoryStore) -> Self {
        Self { inner, log: Vec::new() }
    }
}

impl TopologyStore for RecordingStore {
    fn increment_contact_ages(&mut self, max_id: NodeId) -> StoreResult<()> {
        self.log.push(Op::Age);
        self.inner.increment_contact_ages(max_id)
    }

    fn update_node_position(&mut self, node: NodeId, x: i32, y: i32) -> StoreResult<()> {
        self.log.push(Op::UpdatePosition);
        self.inner.update_node_position(node, x, y)
    }

    fn query_neighbors(
        &mut self,
        x: i32,
        y: i32,
        radius_sq: i64,
        max_id: NodeId,
    ) -> StoreResult<Vec<NodeId>> {
        self.log.push(Op::QueryNeighbors);
        self.inner.query_neighbors(x, y, radius_sq, max_id)
    }

    fn reset_contact(&mut self, owner: NodeId, neighbor: NodeId, x: i32, y: i32) -> StoreResult<()> {
        self.log.push(Op::ResetContact);
        self.inner.reset_contact(owner, neighbor, x, y)
    }
}

/// A store whose chosen operation always fails.
struct FailingStore {
    inner: MemoryStore,
    fail_on: Op,
}

impl FailingStore {
    fn fail(&self) -> StoreError {
        StoreError::Backend("injected failure".into())
    }
}

impl TopologyStore for FailingStore {
    fn increment_contact_ages(&mut self, max_id: NodeId) -> StoreResult<()> {
        if self.fail_on == Op::Age {
            return Err(self.fail());
        }
        self.inner.increment_contact_ages(max_id)
    }

    fn update_node_position(&mut self, node: NodeId, x: i32, y: i32) -> StoreResult<()> {
        if self.fail_on == Op::UpdatePosition {
            return Err(self.fail());
        }
        self.inner.update_node_position(node, x, y)
    }

    fn query_neighbors(
        &mut self,
        x: i32,
        y: i32,
        radius_sq: i64,
        max_id: NodeId,
    ) -> StoreResult<Vec<NodeId>> {
        if self.fail_on == Op::QueryNeighbors {
            return Err(self.fail());
        }
        self.inner.query_neighbors(x, y, radius_sq, max_id)
    }

    fn reset_contact(&mut self, owner: NodeId, neighbor: NodeId, x: i32, y: i32) -> StoreResult<()> {
        if self.fail_on == Op::ResetContact {
            return Err(self.fail());
        }
        self.inner.reset_contact(owner, neighbor, x, y)
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn node_count_mismatch_rejected() {
        let params = test_params(10, 50, 3);
        let nodes = vec![NodeState::at(NodeId(1), 1, 1)];
        let result = Stepper::new(params, nodes, MemoryStore::new(), SeededEntropy::new(1));
        assert!(matches!(
            result,
            Err(SimError::NodeCountMismatch { expected: 3, got: 1 })
        ));
    }

    #[test]
    fn off_grid_start_rejected() {
        let params = test_params(10, 50, 1);
        let nodes = vec![NodeState::at(NodeId(1), 11, 5)];
        let result = Stepper::new(params, nodes, MemoryStore::new(), SeededEntropy::new(1));
        assert!(matches!(result, Err(SimError::NodeOffGrid { .. })));
    }

    #[test]
    fn invalid_params_rejected() {
        let mut params = test_params(10, 50, 1);
        params.grid_size = 0;
        let nodes = vec![NodeState::at(NodeId(1), 1, 1)];
        let result = Stepper::new(params, nodes, MemoryStore::new(), SeededEntropy::new(1));
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Epoch semantics ───────────────────────────────────────────────────────────

#[cfg(test)]
mod epochs {
    use super::*;

    #[test]
    fn zero_move_probability_only_ages() {
        let params = test_params(10, 0, 2);
        let nodes = vec![NodeState::at(NodeId(1), 2, 2), NodeState::at(NodeId(2), 8, 8)];
        let store = RecordingStore::new(seeded_store(&nodes));
        let mut stepper =
            Stepper::new(params, nodes.clone(), store, SeededEntropy::new(1)).unwrap();

        stepper.run_epoch(&mut NoopObserver).unwrap();

        // Exactly one store call: the global age increment.
        assert_eq!(stepper.store.log, vec![Op::Age]);
        assert_eq!(stepper.nodes, nodes);
        let entry = stepper.store.inner.contact(NodeId(1), NodeId(2)).unwrap();
        assert_eq!((entry.age, entry.age_pdl), (1, 1));
    }

    #[test]
    fn positions_commit_before_any_neighbor_query() {
        let mut params = test_params(10, 99, 3);
        params.speed_max = 2;
        let mut rng = SeededEntropy::new(7);
        let nodes = scatter(&params, &mut rng);
        let store = RecordingStore::new(seeded_store(&nodes));
        let mut stepper = Stepper::new(params, nodes, store, rng).unwrap();

        stepper.run_epoch(&mut NoopObserver).unwrap();

        let log = &stepper.store.log;
        assert_eq!(log[0], Op::Age);
        assert_eq!(log.iter().filter(|&&op| op == Op::Age).count(), 1);
        assert_eq!(log.iter().filter(|&&op| op == Op::UpdatePosition).count(), 6);
        assert_eq!(log.iter().filter(|&&op| op == Op::QueryNeighbors).count(), 6);

        // Within each sub-step, the three position writes all precede the
        // first query; a write after a query means the passes interleaved.
        let mut substep_starts = vec![];
        let mut writes_seen = 0;
        for (i, &op) in log.iter().enumerate() {
            if op == Op::UpdatePosition {
                writes_seen += 1;
                if writes_seen % 3 == 1 {
                    substep_starts.push(i);
                }
            }
        }
        assert_eq!(substep_starts.len(), 2);
        for (s, &start) in substep_starts.iter().enumerate() {
            let end = substep_starts.get(s + 1).copied().unwrap_or(log.len());
            let substep = &log[start..end];
            let first_query = substep.iter().position(|&op| op == Op::QueryNeighbors).unwrap();
            assert!(
                substep[..first_query].iter().all(|&op| op == Op::UpdatePosition),
                "movement and discovery interleaved: {substep:?}"
            );
            assert!(
                substep[first_query..].iter().all(|&op| op != Op::UpdatePosition),
                "position write after discovery began: {substep:?}"
            );
        }
    }

    #[test]
    fn in_range_pair_resets_both_directions() {
        // Radio range 10 on a 5-grid: every pair stays in range wherever
        // the walk takes them.
        let mut params = test_params(5, 80, 2);
        params.radio_range = 10;
        let nodes = vec![NodeState::at(NodeId(1), 2, 2), NodeState::at(NodeId(2), 3, 2)];
        let mut store = seeded_store(&nodes);
        // Stale ages from earlier epochs.
        store.increment_contact_ages(NodeId(2)).unwrap();
        store.increment_contact_ages(NodeId(2)).unwrap();

        let mut stepper = Stepper::new(params, nodes, store, SeededEntropy::new(3)).unwrap();
        stepper.run_epoch(&mut NoopObserver).unwrap();

        let ab = stepper.store.contact(NodeId(1), NodeId(2)).unwrap();
        let ba = stepper.store.contact(NodeId(2), NodeId(1)).unwrap();
        assert_eq!((ab.age, ab.age_pdl), (0, 0));
        assert_eq!((ba.age, ba.age_pdl), (0, 0));
        // Each side records its owner's committed position.
        let (x1, y1) = stepper.store.position(NodeId(1)).unwrap();
        assert_eq!((ab.x, ab.y), (x1, y1));
    }

    #[test]
    fn out_of_range_entries_age_one_per_epoch() {
        // Far apart on a large grid with radio range 1: three epochs of
        // unit steps cannot bring the pair into contact.
        let mut params = test_params(1_000, 80, 2);
        params.radio_range = 1;
        let nodes =
            vec![NodeState::at(NodeId(1), 100, 100), NodeState::at(NodeId(2), 900, 900)];
        let store = seeded_store(&nodes);
        let mut stepper = Stepper::new(params, nodes, store, SeededEntropy::new(9)).unwrap();

        stepper.run_epochs(3, &mut NoopObserver).unwrap();

        let entry = stepper.store.contact(NodeId(1), NodeId(2)).unwrap();
        assert_eq!((entry.age, entry.age_pdl), (3, 3));
    }

    #[test]
    fn committed_positions_match_node_state() {
        let params = test_params(10, 99, 4);
        let mut rng = SeededEntropy::new(5);
        let nodes = scatter(&params, &mut rng);
        let store = seeded_store(&nodes);
        let mut stepper = Stepper::new(params, nodes, store, rng).unwrap();

        stepper.run_epochs(5, &mut NoopObserver).unwrap();

        for node in &stepper.nodes {
            assert_eq!(stepper.store.position(node.id), Some((node.x, node.y)));
        }
    }
}

// ── Failure propagation ───────────────────────────────────────────────────────

#[cfg(test)]
mod failures {
    use super::*;

    fn failing_stepper(fail_on: Op) -> Stepper<FailingStore, SeededEntropy> {
        let params = test_params(10, 80, 2);
        let nodes = vec![NodeState::at(NodeId(1), 2, 2), NodeState::at(NodeId(2), 3, 2)];
        let store = FailingStore { inner: seeded_store(&nodes), fail_on };
        Stepper::new(params, nodes, store, SeededEntropy::new(1)).unwrap()
    }

    #[test]
    fn age_increment_failure_aborts_epoch() {
        let mut stepper = failing_stepper(Op::Age);
        let result = stepper.run_epoch(&mut NoopObserver);
        assert!(matches!(result, Err(SimError::Store(_))));
        // Nothing moved: the epoch died before the sub-step loop.
        assert_eq!((stepper.nodes[0].x, stepper.nodes[0].y), (2, 2));
    }

    #[test]
    fn position_write_failure_aborts_epoch() {
        let mut stepper = failing_stepper(Op::UpdatePosition);
        assert!(matches!(
            stepper.run_epoch(&mut NoopObserver),
            Err(SimError::Store(_))
        ));
    }

    #[test]
    fn neighbor_query_failure_aborts_epoch() {
        let mut stepper = failing_stepper(Op::QueryNeighbors);
        assert!(matches!(
            stepper.run_epoch(&mut NoopObserver),
            Err(SimError::Store(_))
        ));
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observers {
    use super::*;

    #[derive(Default)]
    struct Counting {
        epoch_starts: usize,
        substeps: usize,
        epoch_ends: usize,
    }

    impl StepObserver for Counting {
        fn on_epoch_start(&mut self, _epoch: u64) {
            self.epoch_starts += 1;
        }
        fn on_substep(&mut self, _substep: u32, _nodes: &[NodeState]) {
            self.substeps += 1;
        }
        fn on_epoch_end(&mut self, _epoch: u64, _nodes: &[NodeState]) {
            self.epoch_ends += 1;
        }
    }

    #[test]
    fn hooks_fire_per_epoch_and_substep() {
        let mut params = test_params(10, 80, 2);
        params.speed_max = 3;
        let nodes = vec![NodeState::at(NodeId(1), 2, 2), NodeState::at(NodeId(2), 8, 8)];
        let store = seeded_store(&nodes);
        let mut stepper = Stepper::new(params, nodes, store, SeededEntropy::new(1)).unwrap();

        let mut obs = Counting::default();
        stepper.run_epochs(2, &mut obs).unwrap();

        assert_eq!(obs.epoch_starts, 2);
        assert_eq!(obs.substeps, 6);
        assert_eq!(obs.epoch_ends, 2);
        assert_eq!(stepper.epoch(), 2);
    }

    #[test]
    fn disabled_movement_still_reports_epoch_bounds() {
        let params = test_params(10, 0, 1);
        let nodes = vec![NodeState::at(NodeId(1), 5, 5)];
        let store = seeded_store(&nodes);
        let mut stepper = Stepper::new(params, nodes, store, SeededEntropy::new(1)).unwrap();

        let mut obs = Counting::default();
        stepper.run_epoch(&mut obs).unwrap();

        assert_eq!(obs.epoch_starts, 1);
        assert_eq!(obs.substeps, 0);
        assert_eq!(obs.epoch_ends, 1);
    }
}
