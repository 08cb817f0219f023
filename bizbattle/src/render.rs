//! Plain-text presentation of comparison results.
//!
//! Every view is a borrowed `Display` wrapper so front-ends can write it to a
//! terminal, a log line, or a `String` without intermediate allocation.

use core::fmt;

use bizbattle_core::format_value;
use bizbattle_types::{ComparisonResult, Metric, Side};

/// Page heading.
pub const TITLE: &str = "Big Business Battles";
/// Page subheading.
pub const TAGLINE: &str = "Compare financial giants head-to-head.";

const WINNER_MARK: &str = "★";
const SERIES_A_CELL: char = '█';
const SERIES_B_CELL: char = '▒';

/// Section heading, stat cards, and bar chart for one result.
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'r> {
    result: &'r ComparisonResult,
    chart_width: usize,
}

impl<'r> ResultView<'r> {
    /// View over `result` with bars at most `chart_width` cells long.
    #[must_use]
    pub const fn new(result: &'r ComparisonResult, chart_width: usize) -> Self {
        Self {
            result,
            chart_width,
        }
    }
}

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison Results")?;
        writeln!(f)?;
        write!(f, "{}", CardsView(self.result))?;
        writeln!(f)?;
        write!(f, "{}", ChartView::new(self.result, self.chart_width))
    }
}

/// One stat card per metric with both display values and a winner mark.
#[derive(Debug, Clone, Copy)]
pub struct CardsView<'r>(pub &'r ComparisonResult);

impl fmt::Display for CardsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let name_w = r.company_a.chars().count().max(r.company_b.chars().count());
        let values: Vec<(Metric, String, String)> = Metric::ALL
            .into_iter()
            .map(|m| {
                (
                    m,
                    format_value(r.metrics_a.display_value(m)),
                    format_value(r.metrics_b.display_value(m)),
                )
            })
            .collect();
        let value_w = values
            .iter()
            .map(|(_, a, b)| a.len().max(b.len()))
            .max()
            .unwrap_or(0);

        for (i, (metric, value_a, value_b)) in values.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", metric.label())?;
            // Marks go by name, so a company against itself is starred twice.
            let winner = r.winner(*metric);
            for (side, value) in [(Side::A, value_a), (Side::B, value_b)] {
                let mark = if winner == Some(r.company(side)) {
                    WINNER_MARK
                } else {
                    " "
                };
                writeln!(
                    f,
                    "  {mark} {name:<name_w$}  {value:>value_w$}",
                    name = r.company(side),
                )?;
            }
        }
        Ok(())
    }
}

/// Grouped horizontal bar chart: one category per metric, one series per company.
///
/// Bars share one scale, the largest display value across both series.
#[derive(Debug, Clone, Copy)]
pub struct ChartView<'r> {
    result: &'r ComparisonResult,
    width: usize,
}

impl<'r> ChartView<'r> {
    /// Chart over `result` with the longest bar `width` cells long.
    #[must_use]
    pub const fn new(result: &'r ComparisonResult, width: usize) -> Self {
        Self { result, width }
    }

    fn scale(&self) -> f64 {
        self.result
            .chart
            .iter()
            .flat_map(|row| [row.value_a, row.value_b])
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max)
    }
}

/// Cells for `value` on a `width`-cell axis topping out at `max`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if width == 0 || !(value.is_finite() && max.is_finite()) || value <= 0.0 || max <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    cells.clamp(1, width)
}

impl fmt::Display for ChartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "Visual Comparison")?;
        writeln!(f, "Side-by-side metrics comparison")?;
        writeln!(
            f,
            "{SERIES_A_CELL} {}   {SERIES_B_CELL} {}",
            r.company_a, r.company_b
        )?;

        let max = self.scale();
        let label_w = r
            .chart
            .iter()
            .map(|row| row.label().chars().count())
            .max()
            .unwrap_or(0);

        for row in &r.chart {
            writeln!(f)?;
            for (side, cell) in [(Side::A, SERIES_A_CELL), (Side::B, SERIES_B_CELL)] {
                let label = if side == Side::A { row.label() } else { "" };
                let value = row.value(side);
                let bar: String =
                    core::iter::repeat_n(cell, bar_len(value, max, self.width)).collect();
                writeln!(f, "{label:<label_w$} │{bar} {}", format_value(value))?;
            }
        }
        Ok(())
    }
}
