//! Musical style tags that tune difficulty and ornamentation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Pop,
    Jazz,
    Classical,
    Blues,
    Baroque,
    /// Any unrecognised style. Carries no adjustments.
    #[serde(other)]
    Other,
}

impl Style {
    /// Resolve a style by name; unknown names become [`Style::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "pop" => Style::Pop,
            "jazz" => Style::Jazz,
            "classical" => Style::Classical,
            "blues" => Style::Blues,
            "baroque" => Style::Baroque,
            _ => Style::Other,
        }
    }
}
