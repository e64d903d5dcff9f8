//! HarmonyMap — path-finding over music-theory graphs.
//!
//! Two queries: a bounded-length chord-progression search over a fixed
//! weighted graph of diatonic chords, and a note-to-note melodic path search
//! over a scale treated as a linear weighted graph.

pub mod analysis;
pub mod api;
pub mod config;
pub mod graph;
pub mod melody;
pub mod progression;
pub mod theory;

pub use api::HarmonyEngine;
pub use config::HarmonyConfig;
