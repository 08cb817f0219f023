use core::fmt;
use serde::{Deserialize, Serialize};

/// The five financial metrics a battle is scored on.
///
/// Variants are declared in display order; [`Metric::ALL`] mirrors it and is
/// the order used for chart rows, verdicts, and stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Annual revenue, USD billions.
    Revenue,
    /// Market capitalization, USD billions.
    MarketCap,
    /// Headcount. Displayed in thousands.
    Employees,
    /// Annual profit, USD billions.
    Profit,
    /// Year-over-year growth, percent.
    Growth,
}

/// Which way a metric is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Strictly greater raw value wins.
    HigherIsBetter,
    /// Strictly lesser raw value wins.
    LowerIsBetter,
}

impl Metric {
    /// Every metric in display order.
    pub const ALL: [Self; 5] = [
        Self::Revenue,
        Self::MarketCap,
        Self::Employees,
        Self::Profit,
        Self::Growth,
    ];

    /// Stable camelCase key, matching the serialized record field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::MarketCap => "marketCap",
            Self::Employees => "employees",
            Self::Profit => "profit",
            Self::Growth => "growth",
        }
    }

    /// Human-facing label including the display unit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue ($B)",
            Self::MarketCap => "Market Cap ($B)",
            Self::Employees => "Employees (K)",
            Self::Profit => "Profit ($B)",
            Self::Growth => "Growth (%)",
        }
    }

    /// Scoring direction. Fewer employees is framed as favorable.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Employees => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }

    /// Divisor applied to the raw value for charts and cards.
    #[must_use]
    pub const fn display_divisor(self) -> f64 {
        match self {
            Self::Employees => 1000.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
