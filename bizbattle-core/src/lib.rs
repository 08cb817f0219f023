//! bizbattle-core
//!
//! Pure logic behind Big Business Battles.
//!
//! - `dataset`: the ordered, read-only company table and its built-in contents.
//! - `matcher`: case-insensitive exact resolution of free text to a canonical name.
//! - `suggest`: case-insensitive prefix autocomplete.
//! - `compare`: chart rows and per-metric winners for two companies.
//! - `format`: locale-style display formatting of metric values.
//!
//! Nothing here performs I/O or holds mutable state; every function is
//! referentially transparent over its inputs.
#![warn(missing_docs)]

/// Head-to-head comparison builder.
pub mod compare;
/// The company table.
pub mod dataset;
/// Metric value formatting.
pub mod format;
/// Name resolution.
pub mod matcher;
/// Prefix autocomplete.
pub mod suggest;

pub use compare::{build, compare, pick_winner};
pub use dataset::Dataset;
pub use format::format_value;
pub use matcher::{normalize, resolve};
pub use suggest::suggest;

pub use bizbattle_types::{
    BattleConfig, BattleError, ChartRow, CompanyMetrics, ComparisonResult, Direction, Metric,
    MetricVerdict, Side, TieBreak,
};
