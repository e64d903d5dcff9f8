//! Note names ↔ MIDI numbers, and chord root extraction.

/// Octave assumed when a note name carries none ("Eb" = "Eb4").
pub const DEFAULT_OCTAVE: i32 = 4;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a note name into a MIDI note number.
///
/// Format: `<letter><optional accidental><optional octave>`
/// - Letter: C, D, E, F, G, A, B
/// - Accidental: # (sharp) or b (flat)
/// - Octave: -1 to 9, defaulting to 4 (C4 = middle C = MIDI 60)
pub fn parse_note(name: &str) -> Option<u8> {
    let chars: Vec<char> = name.chars().collect();
    let base = match chars.first()? {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut i = 1;
    let accidental: i32 = match chars.get(i) {
        Some('#') => {
            i += 1;
            1
        }
        Some('b') => {
            i += 1;
            -1
        }
        _ => 0,
    };

    let octave_str: String = chars[i..].iter().collect();
    let octave: i32 = if octave_str.is_empty() {
        DEFAULT_OCTAVE
    } else {
        octave_str.parse().ok()?
    };

    if !(-1..=9).contains(&octave) {
        return None;
    }
    let midi = (octave + 1) * 12 + base + accidental;
    u8::try_from(midi).ok().filter(|m| *m <= 127)
}

/// Render a MIDI note number as a sharp-spelled name with octave, e.g. `C#4`.
pub fn midi_to_note(midi: u8) -> String {
    let octave = i32::from(midi / 12) - 1;
    format!("{}{}", SHARP_NAMES[usize::from(midi % 12)], octave)
}

/// Semitone distance between two note names, if both parse.
pub fn interval(a: &str, b: &str) -> Option<u8> {
    Some(parse_note(a)?.abs_diff(parse_note(b)?))
}

/// Root of a chord symbol: the letters A-G plus accidentals, everything else
/// dropped. `"Dm"` → `"D"`, `"Bdim"` → `"B"`, `"Ebmaj7"` → `"Eb"`.
pub fn chord_root(chord: &str) -> String {
    chord
        .chars()
        .filter(|c| matches!(c, 'A'..='G' | '#' | 'b'))
        .collect()
}
