//! Playing difficulty of a progression on a 1–10 scale.

use super::style::Style;

/// Rate a progression: extended and altered chords raise the score, and the
/// style shifts it (jazz hardest, pop easiest). Clamped to `1..=10`.
pub fn difficulty(chords: &[String], style: Style) -> u8 {
    let mut score: i32 = 1;
    for chord in chords {
        if chord.contains('7') {
            score += 1;
        }
        if ["9", "11", "13"].iter().any(|p| chord.contains(p)) {
            score += 2;
        }
        if chord.contains('b') || chord.contains('#') {
            score += 1;
        }
    }

    score += match style {
        Style::Classical | Style::Blues => 1,
        Style::Jazz => 3,
        Style::Pop => -1,
        Style::Baroque | Style::Other => 0,
    };

    score.clamp(1, 10) as u8
}
