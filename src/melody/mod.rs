//! Melody search — note-to-note paths over a scale treated as a linear weighted graph.
//!
//! Self-contained per call: each search builds its own scale graph and does
//! not touch the chord graph.

pub mod scale;
pub mod search;

pub use scale::ScaleType;
pub use search::{find_melody, path_cost, step_cost};
