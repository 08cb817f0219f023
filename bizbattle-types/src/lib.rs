//! Big Business Battles data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod company;
mod comparison;
mod config;
mod error;
mod metric;

pub use company::CompanyMetrics;
pub use comparison::{ChartRow, ComparisonResult, MetricVerdict, Side};
pub use config::{BattleConfig, MIN_CHART_WIDTH, TieBreak};
pub use error::BattleError;
pub use metric::{Direction, Metric};
