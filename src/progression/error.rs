//! Error types for progression search.

use thiserror::Error;

/// The one failure a progression search reports to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// The start or end chord is not a node of the graph.
    #[error("invalid start or end chord '{chord}'")]
    InvalidEndpoint { chord: String },
}
