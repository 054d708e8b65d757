//! CSV position-trace backend.
//!
//! Writes one row per node per sub-step:
//! `epoch, substep, node_id, x, y`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use manet_mobility::NodeState;
use manet_sim::StepObserver;

use crate::{TraceError, TraceResult};

/// A [`StepObserver`] that records every committed node position to CSV.
///
/// Observer methods return nothing, so write errors are stored internally;
/// check [`take_error`][Self::take_error] after the run.  Generic over any
/// `Write` sink — files in production, a `Vec<u8>` in tests.
pub struct PositionTraceWriter<W: Write> {
    writer: Writer<W>,
    epoch: u64,
    last_error: Option<TraceError>,
    finished: bool,
}

impl PositionTraceWriter<File> {
    /// Create (or truncate) a trace file at `path` and write the header row.
    pub fn from_path(path: &Path) -> TraceResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> PositionTraceWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> TraceResult<Self> {
        let mut writer = Writer::from_writer(sink);
        writer.write_record(["epoch", "substep", "node_id", "x", "y"])?;
        Ok(Self {
            writer,
            epoch: 0,
            last_error: None,
            finished: false,
        })
    }

    /// Flush the trace.  Idempotent.
    pub fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Take the first stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner sink (e.g. to inspect the bytes in tests).
    pub fn into_inner(self) -> TraceResult<W> {
        self.writer.into_inner().map_err(|e| TraceError::Io(e.into_error()))
    }

    fn store_err(&mut self, result: TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_rows(&mut self, substep: u32, nodes: &[NodeState]) -> TraceResult<()> {
        for node in nodes {
            self.writer.write_record(&[
                self.epoch.to_string(),
                substep.to_string(),
                node.id.0.to_string(),
                node.x.to_string(),
                node.y.to_string(),
            ])?;
        }
        Ok(())
    }
}

impl<W: Write> StepObserver for PositionTraceWriter<W> {
    fn on_epoch_start(&mut self, epoch: u64) {
        self.epoch = epoch;
    }

    fn on_substep(&mut self, substep: u32, nodes: &[NodeState]) {
        let result = self.write_rows(substep, nodes);
        self.store_err(result);
    }
}
