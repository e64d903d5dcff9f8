//! The engine facade — the operations a transport layer binds to.

use tracing::debug;

use super::types::{
    MelodyAnalysis, MelodyMeta, MelodyRequest, MelodyResponse, ProgressionAnalysis,
    ProgressionRequest, ProgressionResponse,
};
use crate::analysis::{self, Style};
use crate::config::HarmonyConfig;
use crate::graph::{build_chord_graph, ChordGraph};
use crate::melody::{find_melody, ScaleType};
use crate::progression::{find_progression_with, roman_numerals, ProgressionError};

/// Stateless apart from its configuration: every call builds its own graph
/// or scale, so one engine can be shared freely between callers.
#[derive(Debug, Clone, Default)]
pub struct HarmonyEngine {
    config: HarmonyConfig,
}

impl HarmonyEngine {
    pub fn new(config: HarmonyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarmonyConfig {
        &self.config
    }

    /// A fresh copy of the chord graph.
    pub fn graph(&self) -> ChordGraph {
        build_chord_graph()
    }

    /// Search for a chord progression and annotate it with roman numerals.
    ///
    /// Fails only when `start` or `end` is not a chord in the graph.
    pub fn progression(
        &self,
        req: &ProgressionRequest,
    ) -> Result<ProgressionResponse, ProgressionError> {
        let graph = self.graph();
        let length = req.length.unwrap_or(self.config.default_length);
        debug!(start = %req.start, end = %req.end, length, "progression request");

        let path = find_progression_with(&graph, &req.start, &req.end, length, &self.config.search)?;
        let roman = roman_numerals(&graph, &path);
        Ok(ProgressionResponse { path, roman })
    }

    /// Search for a melodic path. Never fails: unknown scales fall back to
    /// major and notes outside the scale give `[start, end]`.
    pub fn melody(&self, req: &MelodyRequest) -> MelodyResponse {
        let scale_name = req
            .scale_type
            .clone()
            .unwrap_or_else(|| self.config.default_scale.clone());
        debug!(start = %req.start_note, end = %req.end_note, scale = %scale_name, "melody request");

        let path = find_melody(
            &req.start_note,
            &req.end_note,
            ScaleType::from_name(&scale_name),
        );
        MelodyResponse {
            path,
            meta: MelodyMeta {
                scale_type: scale_name,
            },
        }
    }

    /// Voicings, tension curve and difficulty of a progression.
    pub fn analyze_progression(&self, chords: &[String], style: Style) -> ProgressionAnalysis {
        ProgressionAnalysis {
            voicings: analysis::voice_lead(chords),
            tension: analysis::tension_curve(chords),
            difficulty: analysis::difficulty(chords, style),
        }
    }

    /// Phrasing, ornaments and scale character of a melody.
    pub fn analyze_melody(&self, notes: &[String], scale: ScaleType, style: Style) -> MelodyAnalysis {
        MelodyAnalysis {
            phrasing: analysis::phrase(notes),
            ornamentations: analysis::ornament(notes, style),
            scale_profile: analysis::scale_profile(scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::SearchOptions;

    #[test]
    fn progression_uses_default_length() {
        let engine = HarmonyEngine::default();
        let resp = engine
            .progression(&ProgressionRequest::new("C", "C"))
            .unwrap();
        assert_eq!(resp.path, vec!["C", "F", "Dm", "C"]);
        assert_eq!(resp.roman, vec!["I", "IV", "ii", "I"]);
    }

    #[test]
    fn progression_respects_configured_length() {
        let engine = HarmonyEngine::new(HarmonyConfig {
            default_length: 3,
            ..HarmonyConfig::default()
        });
        let resp = engine
            .progression(&ProgressionRequest::new("C", "G"))
            .unwrap();
        assert_eq!(resp.path.len(), 3);
    }

    #[test]
    fn progression_respects_search_options() {
        let engine = HarmonyEngine::new(HarmonyConfig {
            search: SearchOptions {
                branching: 3,
                max_expansions: 0,
            },
            ..HarmonyConfig::default()
        });
        // the fallback walk follows each chord's first listed neighbour
        let resp = engine
            .progression(&ProgressionRequest::new("G", "Am").with_length(4))
            .unwrap();
        assert_eq!(resp.path, vec!["G", "C", "F", "Am"]);
    }

    #[test]
    fn invalid_endpoint_is_surfaced() {
        let engine = HarmonyEngine::default();
        let err = engine
            .progression(&ProgressionRequest::new("C", "Xm"))
            .unwrap_err();
        assert_eq!(
            err,
            ProgressionError::InvalidEndpoint {
                chord: "Xm".to_string()
            }
        );
    }

    #[test]
    fn melody_echoes_requested_scale_name() {
        let engine = HarmonyEngine::default();
        let resp = engine.melody(&MelodyRequest::new("C", "G").with_scale("phrygian"));
        assert_eq!(resp.path, vec!["C", "G"]);
        assert_eq!(resp.meta.scale_type, "phrygian");
    }

    #[test]
    fn melody_uses_default_scale() {
        let engine = HarmonyEngine::new(HarmonyConfig {
            default_scale: "minor".to_string(),
            ..HarmonyConfig::default()
        });
        let resp = engine.melody(&MelodyRequest::new("C", "Eb"));
        assert_eq!(resp.path, vec!["C", "Eb"]);
        assert_eq!(resp.meta.scale_type, "minor");
    }

    #[test]
    fn analysis_covers_every_chord() {
        let engine = HarmonyEngine::default();
        let chords: Vec<String> = ["C", "Am", "F", "G"].iter().map(|s| s.to_string()).collect();
        let report = engine.analyze_progression(&chords, Style::Pop);
        assert_eq!(report.voicings.len(), 4);
        assert_eq!(report.tension.curve.len(), 4);
        assert_eq!(report.difficulty, 1);
    }

    #[test]
    fn melody_analysis_includes_profile() {
        let engine = HarmonyEngine::default();
        let notes: Vec<String> = ["C", "D", "F"].iter().map(|s| s.to_string()).collect();
        let report = engine.analyze_melody(&notes, ScaleType::Major, Style::Pop);
        assert_eq!(report.phrasing, vec![notes.clone()]);
        assert_eq!(report.scale_profile.mood, "bright, happy");
    }
}
