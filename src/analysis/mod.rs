//! Analysis passes over search results — tension, difficulty, voicings,
//! phrasing, ornaments and scale character.
//!
//! All passes are pure and never fail; chord or note names they can't read
//! are skipped rather than reported.

pub mod difficulty;
pub mod phrasing;
pub mod profile;
pub mod style;
pub mod tension;
pub mod voicing;

pub use difficulty::difficulty;
pub use phrasing::{ornament, passing_tones, phrase, Ornament};
pub use profile::{scale_profile, ScaleProfile};
pub use style::Style;
pub use tension::{chord_tension, tension_curve, TensionAnalysis};
pub use voicing::{voice_lead, Voicing};
