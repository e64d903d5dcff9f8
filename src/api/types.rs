//! Request and response shapes for the engine operations.
//!
//! Field names serialise in camelCase so the shapes bind directly to a JSON
//! transport.

use serde::{Deserialize, Serialize};

use crate::analysis::{Ornament, ScaleProfile, TensionAnalysis, Voicing};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRequest {
    pub start: String,
    pub end: String,
    /// Number of chords in the result. Uses the configured default when absent.
    #[serde(default)]
    pub length: Option<usize>,
}

impl ProgressionRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            length: None,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionResponse {
    pub path: Vec<String>,
    /// `path` translated to roman numerals; unknown chords pass through.
    pub roman: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyRequest {
    pub start_note: String,
    pub end_note: String,
    /// Scale name. Uses the configured default when absent.
    #[serde(default)]
    pub scale_type: Option<String>,
}

impl MelodyRequest {
    pub fn new(start_note: impl Into<String>, end_note: impl Into<String>) -> Self {
        Self {
            start_note: start_note.into(),
            end_note: end_note.into(),
            scale_type: None,
        }
    }

    pub fn with_scale(mut self, scale_type: impl Into<String>) -> Self {
        self.scale_type = Some(scale_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyMeta {
    /// The scale name as requested, even if it fell back to major.
    pub scale_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MelodyResponse {
    pub path: Vec<String>,
    pub meta: MelodyMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionAnalysis {
    pub voicings: Vec<Voicing>,
    pub tension: TensionAnalysis,
    pub difficulty: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyAnalysis {
    pub phrasing: Vec<Vec<String>>,
    pub ornamentations: Vec<Ornament>,
    pub scale_profile: ScaleProfile,
}
