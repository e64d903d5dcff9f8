//! Tension curve — a rough 0–10 harmonic tension score per chord.

use serde::{Deserialize, Serialize};

const BASE_TENSION: u8 = 2;
const MAX_TENSION: u8 = 10;
/// Relief applied to the final chord, which usually resolves.
const CADENCE_RELIEF: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionAnalysis {
    pub curve: Vec<u8>,
    pub peak: u8,
    pub average: f64,
}

/// Score a single chord symbol before cadence relief.
pub fn chord_tension(chord: &str) -> u8 {
    let mut t = BASE_TENSION;
    if ["7", "dim", "aug"].iter().any(|p| chord.contains(p)) {
        t += 3;
    }
    if chord.contains('b') || chord.contains('#') {
        t += 2;
    }
    if ["9", "11", "13"].iter().any(|p| chord.contains(p)) {
        t += 2;
    }
    t.min(MAX_TENSION)
}

/// Compute the tension curve of a progression.
pub fn tension_curve(chords: &[String]) -> TensionAnalysis {
    let last = chords.len().saturating_sub(1);
    let curve: Vec<u8> = chords
        .iter()
        .enumerate()
        .map(|(i, chord)| {
            let t = chord_tension(chord);
            if i == last {
                t.saturating_sub(CADENCE_RELIEF)
            } else {
                t
            }
        })
        .collect();

    let peak = curve.iter().copied().max().unwrap_or(0);
    let average = if curve.is_empty() {
        0.0
    } else {
        curve.iter().map(|&t| f64::from(t)).sum::<f64>() / curve.len() as f64
    };

    TensionAnalysis {
        curve,
        peak,
        average,
    }
}
