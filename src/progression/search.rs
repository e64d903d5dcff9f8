//! Breadth-first progression search with a capped branching factor.
//!
//! Partial paths are expanded in insertion order from an explicit queue; the
//! first one to reach `length - 1` chords gets the end chord appended and is
//! returned. This is a feasibility search, not a shortest-path search: no
//! path is scored beyond that early exit.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ProgressionError;
use crate::graph::{Adjacency, ChordGraph};

/// Tuning knobs for [`find_progression_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// How many of the cheapest outgoing edges are followed from each chord.
    #[serde(default = "SearchOptions::default_branching")]
    pub branching: usize,
    /// Partial paths expanded before giving up and using the fallback walk.
    #[serde(default = "SearchOptions::default_max_expansions")]
    pub max_expansions: usize,
}

impl SearchOptions {
    fn default_branching() -> usize {
        3
    }

    fn default_max_expansions() -> usize {
        100_000
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            branching: Self::default_branching(),
            max_expansions: Self::default_max_expansions(),
        }
    }
}

/// Find a progression of exactly `length` chords from `start` to `end` using
/// the default [`SearchOptions`].
pub fn find_progression(
    graph: &ChordGraph,
    start: &str,
    end: &str,
    length: usize,
) -> Result<Vec<String>, ProgressionError> {
    find_progression_with(graph, start, end, length, &SearchOptions::default())
}

/// Find a progression of exactly `length` chords from `start` to `end`.
///
/// - `length < 2` returns `[start, end]` without checking for an edge.
/// - Revisiting a chord is allowed once a partial path holds more than two
///   chords; shorter paths only grow with chords they don't contain yet.
/// - If no partial path reaches `length - 1` chords, a greedy walk along each
///   chord's first listed neighbour fills the gap. Its consecutive chords are
///   not guaranteed to be connected.
pub fn find_progression_with(
    graph: &ChordGraph,
    start: &str,
    end: &str,
    length: usize,
    options: &SearchOptions,
) -> Result<Vec<String>, ProgressionError> {
    let adjacency = graph.adjacency();
    for chord in [start, end] {
        if !adjacency.contains(chord) {
            return Err(ProgressionError::InvalidEndpoint {
                chord: chord.to_string(),
            });
        }
    }

    if length < 2 {
        return Ok(vec![start.to_string(), end.to_string()]);
    }

    let target = length - 1;
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    queue.push_back(vec![start]);
    let mut expanded = 0usize;

    while let Some(path) = queue.pop_front() {
        if path.len() == target {
            debug!(expanded, queued = queue.len(), "progression found");
            let mut out: Vec<String> = path.iter().map(|c| c.to_string()).collect();
            out.push(end.to_string());
            return Ok(out);
        }

        if expanded >= options.max_expansions {
            warn!(
                start,
                end,
                length,
                max_expansions = options.max_expansions,
                "progression search hit expansion cap"
            );
            break;
        }
        expanded += 1;

        let Some(&last) = path.last() else {
            continue;
        };
        for next in cheapest_neighbours(adjacency, last, options.branching) {
            if !path.contains(&next) || path.len() > 2 {
                let mut grown = path.clone();
                grown.push(next);
                queue.push_back(grown);
            }
        }
    }

    debug!(start, end, length, "no breadth-first match, using fallback walk");
    Ok(fallback_walk(adjacency, start, end, length))
}

/// The `limit` lowest-weight neighbours of `id`. Equal weights keep edge order.
fn cheapest_neighbours<'g>(adjacency: &'g Adjacency, id: &str, limit: usize) -> Vec<&'g str> {
    let mut ranked: Vec<_> = adjacency.neighbours(id).unwrap_or_default().iter().collect();
    ranked.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    ranked
        .into_iter()
        .take(limit)
        .map(|n| n.id.as_str())
        .collect()
}

/// Walk `length - 2` steps along each chord's first neighbour (or the graph's
/// first chord when there is none), then append `end`.
fn fallback_walk(adjacency: &Adjacency, start: &str, end: &str, length: usize) -> Vec<String> {
    let mut out = vec![start.to_string()];

    let mut current: &str = start;
    for _ in 1..length - 1 {
        let next = adjacency
            .neighbours(current)
            .and_then(|n| n.first())
            .map(|n| n.id.as_str())
            .or_else(|| adjacency.node_ids().next());
        let Some(next) = next else {
            break;
        };
        out.push(next.to_string());
        current = next;
    }

    out.push(end.to_string());
    out
}
