//! Music-theory helpers shared by the analysis passes.

pub mod note;

pub use note::{chord_root, interval, midi_to_note, parse_note};
