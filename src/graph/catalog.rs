//! The fixed diatonic chord graph in C major (triads I through vii°).

use super::{ChordEdge, ChordGraph, ChordNode};

/// (id, display name, function label)
const NODES: [(&str, &str, &str); 7] = [
    ("C", "C Major", "I"),
    ("Dm", "D minor", "ii"),
    ("Em", "E minor", "iii"),
    ("F", "F Major", "IV"),
    ("G", "G Major", "V"),
    ("Am", "A minor", "vi"),
    ("Bdim", "B diminished", "vii°"),
];

/// (from, to, weight). 1 = strong/common resolution, 2 = moderate, 3 = weak/distant.
const EDGES: [(&str, &str, f64); 34] = [
    ("C", "F", 1.0),
    ("C", "G", 1.0),
    ("C", "Am", 2.0),
    ("C", "Em", 3.0),
    ("C", "Dm", 3.0),
    ("F", "C", 1.0),
    ("F", "Dm", 1.0),
    ("F", "G", 2.0),
    ("F", "Am", 2.0),
    ("F", "Bdim", 3.0),
    ("G", "C", 1.0),
    ("G", "Em", 1.0),
    ("G", "Am", 2.0),
    ("G", "F", 2.0),
    ("G", "Dm", 3.0),
    ("Am", "F", 1.0),
    ("Am", "C", 2.0),
    ("Am", "Dm", 2.0),
    ("Am", "G", 2.0),
    ("Am", "Em", 3.0),
    ("Dm", "G", 1.0),
    ("Dm", "F", 1.0),
    ("Dm", "Am", 2.0),
    ("Dm", "Bdim", 2.0),
    ("Dm", "C", 3.0),
    ("Em", "Am", 1.0),
    ("Em", "C", 3.0),
    ("Em", "G", 1.0),
    ("Em", "F", 3.0),
    ("Em", "Dm", 3.0),
    ("Bdim", "C", 1.0),
    ("Bdim", "Em", 2.0),
    ("Bdim", "G", 2.0),
    ("Bdim", "Am", 3.0),
];

/// Build a fresh copy of the diatonic chord graph.
///
/// Every call constructs new data; nothing is cached or shared between calls.
pub fn build_chord_graph() -> ChordGraph {
    let nodes = NODES
        .iter()
        .map(|&(id, name, func)| ChordNode::new(id, name, func))
        .collect();
    let edges = EDGES
        .iter()
        .map(|&(from, to, weight)| ChordEdge::new(from, to, weight))
        .collect();
    ChordGraph::assemble(nodes, edges)
}
