use manet_core::{CoreError, NodeId};
use manet_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("node collection length {got} does not match node_count {expected}")]
    NodeCountMismatch { expected: usize, got: usize },

    #[error("node {node} starts off-grid at ({x}, {y})")]
    NodeOffGrid { node: NodeId, x: i32, y: i32 },

    #[error("topology store failure: {0}")]
    Store(#[from] StoreError),
}

impl From<CoreError> for SimError {
    fn from(err: CoreError) -> Self {
        SimError::Config(err.to_string())
    }
}

pub type SimResult<T> = Result<T, SimError>;
