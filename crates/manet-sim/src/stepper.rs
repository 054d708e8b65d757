//! The `Stepper` — one mobility epoch at a time.

use manet_core::{NodeId, RandomSource, SimParams};
use manet_mobility::{MobilityModel, NodeState};
use manet_store::TopologyStore;

use crate::sync::sync_contacts;
use crate::{SimError, SimResult, StepObserver};

/// Owns the node collection and drives it through mobility epochs.
///
/// The node `Vec` is the authoritative in-memory state; data flows one way
/// from it into the store (positions, contact resets).  The store is only
/// ever read back for neighbor discovery.
///
/// # Type parameters
///
/// `S` is the topology store backend ([`manet_store::SqliteStore`] in
/// production, [`manet_store::MemoryStore`] in tests); `R` is the random
/// source ([`manet_core::DeviceEntropy`] or a seeded one).
pub struct Stepper<S: TopologyStore, R: RandomSource> {
    pub params: SimParams,
    /// Insertion order is simulation order; owned exclusively here.
    pub nodes: Vec<NodeState>,
    pub store: S,
    pub rng: R,
    model: MobilityModel,
    epoch: u64,
}

impl<S: TopologyStore, R: RandomSource> Stepper<S, R> {
    /// Validate the configuration and node collection and build a stepper.
    ///
    /// Rejects invalid parameters, a node count that disagrees with
    /// `params.node_count`, and any starting position off the grid —
    /// all before the first epoch, none retried.
    pub fn new(
        params: SimParams,
        nodes: Vec<NodeState>,
        store: S,
        rng: R,
    ) -> SimResult<Self> {
        params.validate()?;
        if nodes.len() != params.node_count as usize {
            return Err(SimError::NodeCountMismatch {
                expected: params.node_count as usize,
                got: nodes.len(),
            });
        }
        for node in &nodes {
            let on_grid =
                (1..=params.grid_size).contains(&node.x) && (1..=params.grid_size).contains(&node.y);
            if !on_grid {
                return Err(SimError::NodeOffGrid { node: node.id, x: node.x, y: node.y });
            }
        }

        let model = MobilityModel::from_params(&params);
        Ok(Self { params, nodes, store, rng, model, epoch: 0 })
    }

    /// Epochs completed so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Run one mobility epoch.
    ///
    /// Ages every non-self contact entry once, then — unless movement is
    /// disabled — runs `speed_max` sub-steps.  Each sub-step moves and
    /// persists every node before the first neighbor query of its contact
    /// pass, so discovery always observes a fully-committed snapshot.
    ///
    /// The first store error aborts the epoch and is returned to the
    /// caller; no partial recovery is attempted.
    pub fn run_epoch<O: StepObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_epoch_start(self.epoch);

        self.store
            .increment_contact_ages(NodeId(self.params.node_count))?;

        if self.params.move_probability > 0 {
            for substep in 0..self.params.speed_max {
                for node in &mut self.nodes {
                    self.model.step(node, &mut self.rng);
                    self.store.update_node_position(node.id, node.x, node.y)?;
                }
                for node in &self.nodes {
                    sync_contacts(node, &self.params, &mut self.store)?;
                }
                observer.on_substep(substep, &self.nodes);
            }
        }

        self.epoch += 1;
        observer.on_epoch_end(self.epoch - 1, &self.nodes);
        Ok(())
    }

    /// Run `n` consecutive epochs.
    pub fn run_epochs<O: StepObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.run_epoch(observer)?;
        }
        Ok(())
    }
}
