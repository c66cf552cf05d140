use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowIntensity {
    Light,  // L
    Medium, // M
    Heavy,  // H
}

impl FlowIntensity {
    pub fn code(&self) -> &'static str {
        match self {
            FlowIntensity::Light => "L",
            FlowIntensity::Medium => "M",
            FlowIntensity::Heavy => "H",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlowIntensity::Light => "light",
            FlowIntensity::Medium => "medium",
            FlowIntensity::Heavy => "heavy",
        }
    }

    /// Helper: convert input code from CLI (single letter or full word,
    /// any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "l" | "light" => Some(FlowIntensity::Light),
            "m" | "medium" => Some(FlowIntensity::Medium),
            "h" | "heavy" => Some(FlowIntensity::Heavy),
            _ => None,
        }
    }
}
