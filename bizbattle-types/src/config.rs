//! Configuration types shared by the comparison engine and front-ends.

use serde::{Deserialize, Serialize};

use crate::error::BattleError;

/// Smallest accepted bar chart width, in cells.
pub const MIN_CHART_WIDTH: usize = 10;

/// Rule for picking a winner when both raw values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Equal values go to the second company.
    #[default]
    PreferB,
    /// Equal values go to the first company.
    PreferA,
}

/// Global configuration for a comparison engine and its renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Tie rule for per-metric winners.
    pub tie_break: TieBreak,
    /// Width of the longest bar in the text chart.
    pub chart_width: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::PreferB,
            chart_width: 40,
        }
    }
}

impl BattleConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `Config` if the document is malformed or fails [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> Result<Self, BattleError> {
        let cfg: Self = toml::from_str(s).map_err(|e| BattleError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    ///
    /// # Errors
    /// Returns `Config` if `chart_width` is below [`MIN_CHART_WIDTH`].
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.chart_width < MIN_CHART_WIDTH {
            return Err(BattleError::Config(format!(
                "chart_width must be at least {MIN_CHART_WIDTH}, got {}",
                self.chart_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = BattleConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, BattleConfig::default());
    }

    #[test]
    fn parses_all_keys() {
        let cfg = BattleConfig::from_toml_str("tie_break = \"prefer-a\"\nchart_width = 60\n").unwrap();
        assert_eq!(cfg.tie_break, TieBreak::PreferA);
        assert_eq!(cfg.chart_width, 60);
    }

    #[test]
    fn rejects_narrow_chart() {
        let err = BattleConfig::from_toml_str("chart_width = 3").unwrap_err();
        assert!(matches!(err, BattleError::Config(_)));
    }

    #[test]
    fn rejects_unknown_tie_break() {
        let err = BattleConfig::from_toml_str("tie_break = \"coin-flip\"").unwrap_err();
        assert!(matches!(err, BattleError::Config(_)));
    }
}
