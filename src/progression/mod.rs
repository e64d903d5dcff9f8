//! Progression search — bounded-length chord paths over the chord graph.

pub mod error;
pub mod search;

pub use error::ProgressionError;
pub use search::{find_progression, find_progression_with, SearchOptions};

use crate::graph::ChordGraph;

/// Translate chord identifiers into roman-numeral function labels.
///
/// Identifiers the graph doesn't know are passed through unchanged.
pub fn roman_numerals(graph: &ChordGraph, path: &[String]) -> Vec<String> {
    path.iter()
        .map(|chord| {
            graph
                .function_label(chord)
                .map(str::to_string)
                .unwrap_or_else(|| chord.clone())
        })
        .collect()
}
