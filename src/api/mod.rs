//! Engine API — the graph, progression and melody operations plus analysis,
//! with serde request/response types for a transport to bind to.

pub mod engine;
pub mod types;

pub use engine::HarmonyEngine;
pub use types::{
    MelodyAnalysis, MelodyMeta, MelodyRequest, MelodyResponse, ProgressionAnalysis,
    ProgressionRequest, ProgressionResponse,
};
