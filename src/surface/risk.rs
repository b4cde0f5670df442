use serde::{Deserialize, Serialize};

/// Marker color for a safety hotspot, derived from its free-form risk
/// label. High risk is the fallback, so an unrecognized label errs loud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskColor {
    Red,
    Amber,
    Green,
}

impl RiskColor {
    /// Pick a color by case-insensitive substring match on the risk label:
    /// "medium" is amber, "safe" or "low" is green, anything else is red.
    pub fn for_level(risk_level: &str) -> RiskColor {
        let lower = risk_level.to_lowercase();
        if lower.contains("medium") {
            RiskColor::Amber
        } else if lower.contains("safe") || lower.contains("low") {
            RiskColor::Green
        } else {
            RiskColor::Red
        }
    }

    /// Marker fill color as a hex string
    pub fn fill_hex(&self) -> &'static str {
        match self {
            RiskColor::Red => "#ef4444",
            RiskColor::Amber => "#f97316",
            RiskColor::Green => "#10b981",
        }
    }

    /// Marker border color as a hex string
    pub fn border_hex(&self) -> &'static str {
        match self {
            RiskColor::Red => "#b91c1c",
            RiskColor::Amber => "#c2410c",
            RiskColor::Green => "#047857",
        }
    }
}
