//! Scale tables — the modes melody search runs over.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A seven-note scale rooted on C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Major,
    Minor,
    Dorian,
    Mixolydian,
}

impl ScaleType {
    /// All recognised scales.
    pub const ALL: [ScaleType; 4] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::Dorian,
        ScaleType::Mixolydian,
    ];

    /// Resolve a scale by name. Unrecognised names fall back to major.
    pub fn from_name(name: &str) -> Self {
        match name {
            "major" => ScaleType::Major,
            "minor" => ScaleType::Minor,
            "dorian" => ScaleType::Dorian,
            "mixolydian" => ScaleType::Mixolydian,
            other => {
                debug!(scale = other, "unknown scale name, using major");
                ScaleType::Major
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::Dorian => "dorian",
            ScaleType::Mixolydian => "mixolydian",
        }
    }

    /// Note names in scale order. Index arithmetic on this list is linear:
    /// the last note is six steps from the first, not one.
    pub fn notes(self) -> &'static [&'static str; 7] {
        match self {
            ScaleType::Major => &["C", "D", "E", "F", "G", "A", "B"],
            ScaleType::Minor => &["C", "D", "Eb", "F", "G", "Ab", "Bb"],
            ScaleType::Dorian => &["C", "D", "Eb", "F", "G", "A", "Bb"],
            ScaleType::Mixolydian => &["C", "D", "E", "F", "G", "A", "Bb"],
        }
    }

    /// Position of `note` in the scale, if present.
    pub fn index_of(self, note: &str) -> Option<usize> {
        self.notes().iter().position(|&n| n == note)
    }
}
