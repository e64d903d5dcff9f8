//! Melodic phrasing and ornament suggestions.

use serde::{Deserialize, Serialize};

use super::style::Style;
use crate::theory::{interval, midi_to_note, parse_note};

/// Longest phrase before a forced break.
const MAX_PHRASE_LEN: usize = 8;
/// Intervals of at least this many semitones get passing tones.
const LEAP_THRESHOLD: u8 = 3;
const MAX_PASSING_TONES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Ornament {
    /// Chromatic tones filling a leap that starts at `position`.
    PassingTone { position: usize, notes: Vec<String> },
    /// A trill on the note at `position`.
    Trill { position: usize, duration: String },
}

/// Whether the note at `index` is strictly higher than both neighbours.
fn is_peak(notes: &[String], index: usize) -> bool {
    if index == 0 || index + 1 >= notes.len() {
        return false;
    }
    match (
        parse_note(&notes[index - 1]),
        parse_note(&notes[index]),
        parse_note(&notes[index + 1]),
    ) {
        (Some(prev), Some(curr), Some(next)) => curr > prev && curr > next,
        _ => false,
    }
}

/// Split a melody into phrases, breaking after each peak or every eight notes.
pub fn phrase(notes: &[String]) -> Vec<Vec<String>> {
    let mut phrases = Vec::new();
    let mut current = Vec::new();
    for (i, note) in notes.iter().enumerate() {
        current.push(note.clone());
        if is_peak(notes, i) || current.len() >= MAX_PHRASE_LEN {
            phrases.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        phrases.push(current);
    }
    phrases
}

/// Up to two chromatic tones strictly between `from` and `to`, moving toward `to`.
pub fn passing_tones(from: &str, to: &str) -> Vec<String> {
    let (Some(a), Some(b)) = (parse_note(from), parse_note(to)) else {
        return Vec::new();
    };
    let tones: Vec<u8> = if b > a {
        (a + 1..b).take(MAX_PASSING_TONES).collect()
    } else {
        (b + 1..a).rev().take(MAX_PASSING_TONES).collect()
    };
    tones.into_iter().map(midi_to_note).collect()
}

/// Suggest ornaments: passing tones over leaps of three semitones or more,
/// and for baroque style, trills on notes after the first that move by step.
pub fn ornament(notes: &[String], style: Style) -> Vec<Ornament> {
    let mut out = Vec::new();
    for i in 0..notes.len().saturating_sub(1) {
        let step = interval(&notes[i], &notes[i + 1]);
        if step.is_some_and(|s| s >= LEAP_THRESHOLD) {
            out.push(Ornament::PassingTone {
                position: i,
                notes: passing_tones(&notes[i], &notes[i + 1]),
            });
        }
        // the first note never trills
        if style == Style::Baroque && i > 0 && step.is_some_and(|s| s <= 2) {
            out.push(Ornament::Trill {
                position: i,
                duration: "16n".to_string(),
            });
        }
    }
    out
}
