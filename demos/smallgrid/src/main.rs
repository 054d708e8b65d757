//! smallgrid — smallest end-to-end run of the manet mobility engine.
//!
//! Scatters 6 nodes on a 12×12 grid, seeds an SQLite topology database
//! with the full contact mesh, and runs 20 mobility epochs with a CSV
//! position trace.  Swap the grid size, node count, and epoch count for
//! larger experiments; the engine is the same.

use std::path::Path;

use anyhow::Result;

use manet_core::{NodeId, SeededEntropy, SimParams};
use manet_mobility::{NodeState, scatter};
use manet_output::PositionTraceWriter;
use manet_sim::{StepObserver, Stepper};
use manet_store::SqliteStore;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const EPOCHS: u64 = 20;
const DB_PATH: &str = "topology.db";
const TRACE_PATH: &str = "trace.csv";

// ── Observer: console progress + CSV trace ────────────────────────────────────

struct Progress {
    trace: PositionTraceWriter<std::fs::File>,
}

impl StepObserver for Progress {
    fn on_epoch_start(&mut self, epoch: u64) {
        self.trace.on_epoch_start(epoch);
    }

    fn on_substep(&mut self, substep: u32, nodes: &[NodeState]) {
        self.trace.on_substep(substep, nodes);
    }

    fn on_epoch_end(&mut self, epoch: u64, nodes: &[NodeState]) {
        if (epoch + 1) % 5 == 0 {
            println!("epoch {:>3}: {} nodes stepped", epoch + 1, nodes.len());
        }
        self.trace.on_epoch_end(epoch, nodes);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallgrid — manet mobility engine ===");

    let params = SimParams {
        grid_size: 12,
        move_probability: 80,
        speed_max: 2,
        radio_range: 3,
        node_count: 6,
        waypoint: false,
    };

    // 1. Scatter the nodes and seed the topology database.
    let mut rng = SeededEntropy::new(SEED);
    let nodes = scatter(&params, &mut rng);
    let mut store = SqliteStore::open(Path::new(DB_PATH))?;
    let positions: Vec<_> = nodes.iter().map(|n| (n.id, n.x, n.y)).collect();
    store.seed_full_mesh(&positions)?;
    println!(
        "Seeded {DB_PATH}: {} nodes, {} contact entries",
        params.node_count,
        params.node_count * params.node_count
    );

    // 2. Run the epochs with a CSV trace.
    let trace = PositionTraceWriter::from_path(Path::new(TRACE_PATH))?;
    let mut observer = Progress { trace };
    let mut stepper = Stepper::new(params.clone(), nodes, store, rng)?;
    stepper.run_epochs(EPOCHS, &mut observer)?;

    observer.trace.finish()?;
    if let Some(e) = observer.trace.take_error() {
        eprintln!("trace error: {e}");
    }

    // 3. Report final positions and a contact-age sample.
    println!("\nFinal positions after {EPOCHS} epochs:");
    for node in &stepper.nodes {
        println!(
            "  node {:>2} at ({:>2}, {:>2}) heading {:?}",
            node.id.0, node.x, node.y, node.heading
        );
    }

    println!("\nContact ages seen from node 1:");
    for neighbor in 2..=params.node_count {
        if let Some(entry) = stepper.store.contact(NodeId(1), NodeId(neighbor))? {
            println!(
                "  pair (1, {neighbor}): age {} age_pdl {}",
                entry.age, entry.age_pdl
            );
        }
    }

    println!("\nTrace written to {TRACE_PATH}");
    Ok(())
}
