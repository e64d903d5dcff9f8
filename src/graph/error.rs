//! Error types for chord graph construction.

use thiserror::Error;

/// A structural problem found while assembling a [`ChordGraph`](super::ChordGraph).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("duplicate chord node '{id}'")]
    DuplicateNode { id: String },

    #[error("edge {from} -> {to} references unknown chord '{missing}'")]
    UnknownNode {
        from: String,
        to: String,
        missing: String,
    },

    #[error("duplicate edge {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("edge {from} -> {to} has invalid weight {weight} (must be finite and > 0)")]
    InvalidWeight { from: String, to: String, weight: f64 },
}
