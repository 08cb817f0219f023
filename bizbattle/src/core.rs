use bizbattle_core::Dataset;
use bizbattle_types::{BattleConfig, BattleError, ComparisonResult, TieBreak};

use crate::render::ResultView;
use crate::session::Session;

/// Comparison engine over one read-only dataset.
#[derive(Debug, Clone)]
pub struct Battle {
    pub(crate) dataset: Dataset,
    pub(crate) cfg: BattleConfig,
}

/// Builder for constructing a [`Battle`] with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct BattleBuilder {
    dataset: Option<Dataset>,
    cfg: BattleConfig,
}

impl BattleBuilder {
    /// Create a new builder over the built-in dataset with default settings.
    ///
    /// Defaults: ties go to company B, 40-cell chart bars.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset. The built-in five companies are used otherwise.
    #[must_use]
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: BattleConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the tie rule for per-metric winners.
    ///
    /// The default hands ties to the second company. Neither side is
    /// semantically right; the rule only has to be deterministic.
    #[must_use]
    pub const fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.cfg.tie_break = tie_break;
        self
    }

    /// Set the width of the longest bar in the text chart.
    #[must_use]
    pub const fn chart_width(mut self, width: usize) -> Self {
        self.cfg.chart_width = width;
        self
    }

    /// Build the `Battle`.
    ///
    /// # Errors
    /// Returns `Config` if the configuration fails validation.
    pub fn build(self) -> Result<Battle, BattleError> {
        self.cfg.validate()?;
        Ok(Battle {
            dataset: self.dataset.unwrap_or_default(),
            cfg: self.cfg,
        })
    }
}

impl Battle {
    /// Start building a new `Battle`.
    ///
    /// ```
    /// use bizbattle::{Battle, TieBreak};
    ///
    /// let battle = Battle::builder().tie_break(TieBreak::PreferB).build()?;
    /// let result = battle.compare("apple", "GOOGLE")?;
    /// assert_eq!(result.company_b, "Google");
    /// # Ok::<(), bizbattle::BattleError>(())
    /// ```
    #[must_use]
    pub fn builder() -> BattleBuilder {
        BattleBuilder::new()
    }

    /// The dataset this battle matches against.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BattleConfig {
        &self.cfg
    }

    /// Resolve free text to a canonical name.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&str> {
        bizbattle_core::resolve(input, &self.dataset)
    }

    /// Autocomplete candidates for partial text.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<&str> {
        bizbattle_core::suggest(input, &self.dataset)
    }

    /// Compare two companies by free-text name.
    ///
    /// # Errors
    /// Returns `Unresolved` if either name does not match a dataset entry.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "bizbattle", skip(self), fields(tie_break = ?self.cfg.tie_break))
    )]
    pub fn compare(&self, input_a: &str, input_b: &str) -> Result<ComparisonResult, BattleError> {
        let out = bizbattle_core::compare(input_a, input_b, &self.dataset, self.cfg.tie_break);
        #[cfg(feature = "tracing")]
        match &out {
            Ok(r) => tracing::debug!(a = %r.company_a, b = %r.company_b, "comparison built"),
            Err(e) => tracing::debug!(error = %e, "comparison rejected"),
        }
        out
    }

    /// Canonical names in dataset order.
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.dataset.names()
    }

    /// Fresh interactive view state bound to this battle.
    #[must_use]
    pub fn session(&self) -> Session<'_> {
        Session::new(self)
    }

    /// Full text rendering of a result using this battle's chart width.
    #[must_use]
    pub fn render<'r>(&self, result: &'r ComparisonResult) -> ResultView<'r> {
        ResultView::new(result, self.cfg.chart_width)
    }
}
