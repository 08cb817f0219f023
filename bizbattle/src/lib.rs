//! Big Business Battles: compare financial giants head-to-head.
//!
//! Overview
//! - Resolves free-text company names case-insensitively against a fixed dataset.
//! - Offers prefix autocomplete suitable for calling on every keystroke.
//! - Builds a per-metric scorecard and chart rows for two companies.
//! - Models the interactive surface as an explicit [`Session`] so any front-end
//!   (terminal, web, tests) drives the same state transitions.
//!
//! Scoring
//! - Revenue, market cap, profit, and growth: the strictly greater value wins.
//! - Employees: the strictly smaller headcount wins.
//! - Ties are settled by [`TieBreak`]; the default hands them to company B.
//!
//! Examples
//! ```
//! use bizbattle::{Battle, Metric, Side};
//!
//! let battle = Battle::builder().build()?;
//!
//! assert_eq!(battle.suggest("a"), ["Apple", "Amazon"]);
//!
//! let mut session = battle.session();
//! session.edit(Side::A, "micro");
//! session.select_suggestion(Side::A, "Microsoft")?;
//! session.edit(Side::B, "  META ");
//! let result = session.compare()?;
//! assert_eq!(result.winner(Metric::Growth), Some("Microsoft"));
//! println!("{}", battle.render(result));
//! # Ok::<(), bizbattle::BattleError>(())
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
/// Text rendering of results.
pub mod render;
/// Interactive view state.
pub mod session;

pub use crate::core::{Battle, BattleBuilder};
pub use render::{CardsView, ChartView, ResultView};
pub use session::{EntryField, Session};

pub use bizbattle_core::{Dataset, format_value};
pub use bizbattle_types::{
    BattleConfig, BattleError, ChartRow, CompanyMetrics, ComparisonResult, Direction, Metric,
    MetricVerdict, Side, TieBreak,
};
