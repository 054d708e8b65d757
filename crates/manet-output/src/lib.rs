//! `manet-output` — position-trace output for the manet mobility engine.
//!
//! One backend: CSV, one row per node per sub-step, driven through the
//! stepper's observer hooks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use manet_output::PositionTraceWriter;
//!
//! let mut trace = PositionTraceWriter::from_path(Path::new("trace.csv"))?;
//! stepper.run_epochs(epochs, &mut trace)?;
//! trace.finish()?;
//! if let Some(e) = trace.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;


pub use csv::PositionTraceWriter;
pub use error::{TraceError, TraceResult};
