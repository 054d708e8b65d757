//! Stepper observer trait for progress reporting and trace collection.

use manet_mobility::NodeState;

/// Callbacks invoked by [`Stepper`][crate::Stepper] at key points in the
/// epoch loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only access to the
/// node collection; output writers record position traces through these
/// hooks without the stepper knowing about any format.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl StepObserver for ProgressPrinter {
///     fn on_epoch_end(&mut self, epoch: u64, nodes: &[NodeState]) {
///         println!("epoch {epoch}: {} nodes stepped", nodes.len());
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called before an epoch's age increment and sub-step loop.
    fn on_epoch_start(&mut self, _epoch: u64) {}

    /// Called after each sub-step, once all positions are committed and all
    /// contact resets for the sub-step are done.
    fn on_substep(&mut self, _substep: u32, _nodes: &[NodeState]) {}

    /// Called after the epoch's last sub-step (or immediately after the age
    /// increment when movement is disabled).
    fn on_epoch_end(&mut self, _epoch: u64, _nodes: &[NodeState]) {}
}

/// A [`StepObserver`] that does nothing.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}
