//! Voice leading — three-note voicings chosen to minimise movement between chords.

use serde::{Deserialize, Serialize};

use crate::theory::{chord_root, midi_to_note, parse_note};

/// C4-E4-G4, the voicing the first chord moves from.
const OPENING: [u8; 3] = [60, 64, 67];

/// A voiced chord, lowest voice first. Empty when the chord root couldn't be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voicing {
    pub chord: String,
    pub notes: Vec<String>,
}

/// Total semitone movement between two voicings, voice by voice.
fn movement(from: &[u8; 3], to: &[u8; 3]) -> u32 {
    from.iter()
        .zip(to)
        .map(|(a, b)| u32::from(a.abs_diff(*b)))
        .sum()
}

/// Root position plus first and second inversion of a major triad on `root`.
///
/// The triad is naive: the third is always major, whatever the chord quality.
fn triad_options(root: u8) -> Option<[[u8; 3]; 3]> {
    let third = root.checked_add(4)?;
    let fifth = root.checked_add(7)?;
    Some([
        [root, third, fifth],
        [third.checked_sub(12)?, fifth.checked_sub(12)?, root],
        [fifth.checked_sub(12)?, root, third],
    ])
}

/// Voice each chord in turn, picking the option closest to the previous voicing.
pub fn voice_lead(chords: &[String]) -> Vec<Voicing> {
    let mut last = OPENING;
    chords
        .iter()
        .map(|chord| {
            let options = parse_note(&format!("{}4", chord_root(chord))).and_then(triad_options);
            let Some(options) = options else {
                return Voicing {
                    chord: chord.clone(),
                    notes: Vec::new(),
                };
            };

            let mut best = options[0];
            let mut best_cost = u32::MAX;
            for option in options {
                let cost = movement(&last, &option);
                if cost < best_cost {
                    best_cost = cost;
                    best = option;
                }
            }
            last = best;

            Voicing {
                chord: chord.clone(),
                notes: best.iter().map(|&m| midi_to_note(m)).collect(),
            }
        })
        .collect()
}
