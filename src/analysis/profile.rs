//! Scale character profiles — mood and usage notes for each scale.

use serde::{Deserialize, Serialize};

use crate::melody::ScaleType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleProfile {
    pub mood: String,
    pub common_uses: Vec<String>,
    pub characteristic_intervals: Vec<String>,
    pub suggestion: String,
}

impl ScaleProfile {
    fn new(mood: &str, uses: &[&str], intervals: &[&str], suggestion: &str) -> Self {
        Self {
            mood: mood.to_string(),
            common_uses: uses.iter().map(|s| s.to_string()).collect(),
            characteristic_intervals: intervals.iter().map(|s| s.to_string()).collect(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// Describe the character of a scale.
pub fn scale_profile(scale: ScaleType) -> ScaleProfile {
    match scale {
        ScaleType::Major => ScaleProfile::new(
            "bright, happy",
            &["pop", "classical", "folk"],
            &["major 2nd", "major 3rd", "perfect 4th"],
            "Great for uplifting melodies and happy songs",
        ),
        ScaleType::Minor => ScaleProfile::new(
            "dark, melancholic",
            &["classical", "metal", "blues"],
            &["minor 3rd", "minor 6th", "minor 7th"],
            "Perfect for emotional and dramatic pieces",
        ),
        ScaleType::Dorian => ScaleProfile::new(
            "mysterious, sophisticated",
            &["jazz", "folk", "medieval"],
            &["minor 3rd", "major 6th"],
            "Creates a sophisticated, ancient sound",
        ),
        ScaleType::Mixolydian => ScaleProfile::new(
            "bluesy, relaxed",
            &["rock", "blues", "folk"],
            &["major 3rd", "minor 7th"],
            "Adds a laid-back dominant colour to major melodies",
        ),
    }
}
