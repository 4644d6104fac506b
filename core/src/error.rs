//! Common error types for store operations.

use crate::{EdgeId, NodeId};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a graph store adapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced node does not exist.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The referenced edge does not exist.
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),
}
