//! Derived, per-request comparison values.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::company::CompanyMetrics;
use crate::metric::Metric;

/// One of the two compared positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first entry field.
    A,
    /// The second entry field.
    B,
}

/// One metric's two-company value pair, shaped for a grouped bar chart.
///
/// Serializes as a keyed object: `{"name": label, "<A>": x, "<B>": y}`.
/// When both sides name the same company the key appears once and carries
/// side B's value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// Metric this row plots.
    pub metric: Metric,
    /// Canonical name of company A.
    pub company_a: String,
    /// Display value for company A.
    pub value_a: f64,
    /// Canonical name of company B.
    pub company_b: String,
    /// Display value for company B.
    pub value_b: f64,
}

impl ChartRow {
    /// Category label, e.g. `"Revenue ($B)"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.metric.label()
    }

    /// Value plotted for `company`, with keyed-object semantics.
    #[must_use]
    pub fn value_for(&self, company: &str) -> Option<f64> {
        if company == self.company_b {
            Some(self.value_b)
        } else if company == self.company_a {
            Some(self.value_a)
        } else {
            None
        }
    }

    /// Value plotted for a side.
    #[must_use]
    pub const fn value(&self, side: Side) -> f64 {
        match side {
            Side::A => self.value_a,
            Side::B => self.value_b,
        }
    }
}

impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let same = self.company_a == self.company_b;
        let mut map = serializer.serialize_map(Some(if same { 2 } else { 3 }))?;
        map.serialize_entry("name", self.label())?;
        if !same {
            map.serialize_entry(&self.company_a, &self.value_a)?;
        }
        map.serialize_entry(&self.company_b, &self.value_b)?;
        map.end()
    }
}

/// Raw values for one metric and which side wins it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricVerdict {
    /// Metric being judged.
    pub metric: Metric,
    /// Raw stored value for company A.
    pub value_a: f64,
    /// Raw stored value for company B.
    pub value_b: f64,
    /// Winning side under the metric's direction and the tie rule.
    pub winner: Side,
}

/// Full result of one successful comparison request.
///
/// Both names are canonical dataset keys. `chart` and `verdicts` hold one
/// entry per metric in [`Metric::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Canonical name of company A.
    pub company_a: String,
    /// Canonical name of company B.
    pub company_b: String,
    /// Metrics of company A.
    pub metrics_a: CompanyMetrics,
    /// Metrics of company B.
    pub metrics_b: CompanyMetrics,
    /// Chart-ready rows.
    pub chart: Vec<ChartRow>,
    /// Winner per metric.
    pub verdicts: Vec<MetricVerdict>,
}

impl ComparisonResult {
    /// Canonical name for a side.
    #[must_use]
    pub fn company(&self, side: Side) -> &str {
        match side {
            Side::A => &self.company_a,
            Side::B => &self.company_b,
        }
    }

    /// Metrics for a side.
    #[must_use]
    pub const fn metrics(&self, side: Side) -> &CompanyMetrics {
        match side {
            Side::A => &self.metrics_a,
            Side::B => &self.metrics_b,
        }
    }

    /// Chart row for `metric`.
    #[must_use]
    pub fn chart_row(&self, metric: Metric) -> Option<&ChartRow> {
        self.chart.iter().find(|r| r.metric == metric)
    }

    /// Verdict for `metric`.
    #[must_use]
    pub fn verdict(&self, metric: Metric) -> Option<&MetricVerdict> {
        self.verdicts.iter().find(|v| v.metric == metric)
    }

    /// Canonical name of the company that wins `metric`.
    #[must_use]
    pub fn winner(&self, metric: Metric) -> Option<&str> {
        self.verdict(metric).map(|v| self.company(v.winner))
    }

    /// Number of metrics won by `side`.
    #[must_use]
    pub fn wins(&self, side: Side) -> usize {
        self.verdicts.iter().filter(|v| v.winner == side).count()
    }
}
