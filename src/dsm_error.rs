//! DsmError: unified error type for dsm-graph public APIs.
//!
//! All fallible operations in this crate report through this enum so callers
//! have a single error surface to match on.

use thiserror::Error;

/// Unified error type for dsm-graph operations.
#[derive(Debug, Error)]
pub enum DsmError {
    /// A graph operation received a node that is absent from the current
    /// live node set. This is always a caller error against the view being
    /// held; derived views never resurrect removed nodes.
    #[error("graph does not contain node {0}")]
    NodeNotFound(String),
    /// An I/O failure in one of the edge-list/report collaborators.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DsmError {
    /// Build a [`DsmError::NodeNotFound`] from any debuggable node value.
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        DsmError::NodeNotFound(format!("{node:?}"))
    }
}
