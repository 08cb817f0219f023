//! Head-to-head comparison of two resolved companies.

use bizbattle_types::{
    BattleError, ChartRow, CompanyMetrics, ComparisonResult, Direction, Metric, MetricVerdict,
    Side, TieBreak,
};

use crate::dataset::Dataset;
use crate::matcher::resolve;

/// Resolve both inputs and build the chart rows and per-metric verdicts.
///
/// Either input failing to resolve produces a single `Unresolved` error; the
/// error does not say which side failed.
///
/// # Errors
/// Returns `Unresolved` when `input_a` or `input_b` is not a dataset name.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "bizbattle::compare", level = "debug", skip(dataset))
)]
pub fn compare(
    input_a: &str,
    input_b: &str,
    dataset: &Dataset,
    tie_break: TieBreak,
) -> Result<ComparisonResult, BattleError> {
    let lookup = |input: &str| {
        resolve(input, dataset).and_then(|name| dataset.get(name).map(|m| (name, *m)))
    };
    let (Some((company_a, metrics_a)), Some((company_b, metrics_b))) =
        (lookup(input_a), lookup(input_b))
    else {
        return Err(BattleError::unresolved(input_a, input_b, dataset.names()));
    };

    Ok(build(company_a, metrics_a, company_b, metrics_b, tie_break))
}

/// Assemble a result from already-resolved companies.
#[must_use]
pub fn build(
    company_a: &str,
    metrics_a: CompanyMetrics,
    company_b: &str,
    metrics_b: CompanyMetrics,
    tie_break: TieBreak,
) -> ComparisonResult {
    let chart = Metric::ALL
        .into_iter()
        .map(|metric| ChartRow {
            metric,
            company_a: company_a.to_string(),
            value_a: metrics_a.display_value(metric),
            company_b: company_b.to_string(),
            value_b: metrics_b.display_value(metric),
        })
        .collect();

    let verdicts = Metric::ALL
        .into_iter()
        .map(|metric| {
            let value_a = metrics_a.value(metric);
            let value_b = metrics_b.value(metric);
            MetricVerdict {
                metric,
                value_a,
                value_b,
                winner: pick_winner(metric, value_a, value_b, tie_break),
            }
        })
        .collect();

    ComparisonResult {
        company_a: company_a.to_string(),
        company_b: company_b.to_string(),
        metrics_a,
        metrics_b,
        chart,
        verdicts,
    }
}

/// Winning side for one metric's raw values.
///
/// A side wins only on a strict inequality in the metric's direction;
/// equal values fall to `tie_break`.
#[must_use]
pub fn pick_winner(metric: Metric, value_a: f64, value_b: f64, tie_break: TieBreak) -> Side {
    let a_better = match metric.direction() {
        Direction::HigherIsBetter => value_a > value_b,
        Direction::LowerIsBetter => value_a < value_b,
    };
    let b_better = match metric.direction() {
        Direction::HigherIsBetter => value_b > value_a,
        Direction::LowerIsBetter => value_b < value_a,
    };
    match (a_better, b_better) {
        (true, _) => Side::A,
        (_, true) => Side::B,
        _ => match tie_break {
            TieBreak::PreferA => Side::A,
            TieBreak::PreferB => Side::B,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_wins_except_employees() {
        assert_eq!(pick_winner(Metric::Revenue, 2.0, 1.0, TieBreak::PreferB), Side::A);
        assert_eq!(pick_winner(Metric::Growth, 1.0, 2.0, TieBreak::PreferA), Side::B);
        assert_eq!(pick_winner(Metric::Employees, 1.0, 2.0, TieBreak::PreferB), Side::A);
        assert_eq!(pick_winner(Metric::Employees, 3.0, 2.0, TieBreak::PreferA), Side::B);
    }

    #[test]
    fn ties_follow_policy() {
        for metric in Metric::ALL {
            assert_eq!(pick_winner(metric, 5.0, 5.0, TieBreak::PreferB), Side::B);
            assert_eq!(pick_winner(metric, 5.0, 5.0, TieBreak::PreferA), Side::A);
        }
    }

    #[test]
    fn employees_chart_value_is_in_thousands() {
        let ds = Dataset::builtin();
        let r = compare("apple", "microsoft", &ds, TieBreak::default()).unwrap();
        let row = r.chart_row(Metric::Employees).unwrap();
        assert_eq!(row.value_for("Apple"), Some(164.0));
        assert_eq!(row.value_for("Microsoft"), Some(221.0));
        assert_eq!(r.winner(Metric::Employees), Some("Apple"));
    }

    #[test]
    fn same_company_against_itself_goes_to_b() {
        let ds = Dataset::builtin();
        let r = compare("Meta", "meta", &ds, TieBreak::PreferB).unwrap();
        assert_eq!(r.wins(Side::B), Metric::ALL.len());
    }

    #[test]
    fn either_side_unresolved_is_one_error() {
        let ds = Dataset::builtin();
        for (a, b) in [("nope", "Apple"), ("Apple", "nope"), ("x", "y")] {
            let err = compare(a, b, &ds, TieBreak::default()).unwrap_err();
            assert!(err.is_validation(), "{a} vs {b}");
        }
    }
}
