//! Per-company metric record.

use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Financial snapshot for one company.
///
/// Currency fields are in USD billions. Values are immutable once a dataset
/// has been built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetrics {
    /// Annual revenue, USD billions.
    pub revenue: f64,
    /// Market capitalization, USD billions.
    pub market_cap: f64,
    /// Headcount.
    pub employees: u64,
    /// Annual profit, USD billions.
    pub profit: f64,
    /// Year-over-year growth, percent.
    pub growth: f64,
}

impl CompanyMetrics {
    /// Raw stored value for `metric`. Headcount is widened to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::MarketCap => self.market_cap,
            Metric::Employees => self.employees as f64,
            Metric::Profit => self.profit,
            Metric::Growth => self.growth,
        }
    }

    /// Value in the metric's display unit (headcount in thousands).
    #[must_use]
    pub fn display_value(&self, metric: Metric) -> f64 {
        self.value(metric) / metric.display_divisor()
    }
}
