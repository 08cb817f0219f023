//! Interactive view state: two entry fields, focus, alert, and current result.
//!
//! Each piece of state has one writer per update and is replaced wholesale,
//! never patched. Front-ends (terminal, web, tests) drive the same contract:
//!
//! - `edit` recomputes the edited field's suggestions and opens its list;
//! - `focus` opens the focused field's list;
//! - `select_suggestion` writes the canonical name, closes the list, and
//!   moves focus from A to B;
//! - `compare` replaces the result on success or sets the alert on failure,
//!   leaving the previous result on screen.

use bizbattle_types::{BattleError, ComparisonResult, Side};

use crate::core::Battle;

/// One free-text entry point with its live suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryField<'a> {
    text: String,
    suggestions: Vec<&'a str>,
    open: bool,
}

impl<'a> EntryField<'a> {
    /// Current text, exactly as typed or selected.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Suggestions computed for the current text, whether shown or not.
    #[must_use]
    pub fn suggestions(&self) -> &[&'a str] {
        &self.suggestions
    }

    /// Whether the suggestion list is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Suggestions as displayed: empty unless the list is open.
    #[must_use]
    pub fn visible(&self) -> &[&'a str] {
        if self.open { &self.suggestions[..] } else { &[] }
    }
}

/// View state for one user working against a [`Battle`].
#[derive(Debug, Clone)]
pub struct Session<'a> {
    battle: &'a Battle,
    a: EntryField<'a>,
    b: EntryField<'a>,
    focus: Option<Side>,
    result: Option<ComparisonResult>,
    alert: Option<String>,
}

impl<'a> Session<'a> {
    pub(crate) fn new(battle: &'a Battle) -> Self {
        Self {
            battle,
            a: EntryField::default(),
            b: EntryField::default(),
            focus: None,
            result: None,
            alert: None,
        }
    }

    /// Entry field for `side`.
    #[must_use]
    pub const fn field(&self, side: Side) -> &EntryField<'a> {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    const fn field_mut(&mut self, side: Side) -> &mut EntryField<'a> {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Text currently in `side`'s field.
    #[must_use]
    pub fn text(&self, side: Side) -> &str {
        self.field(side).text()
    }

    /// Suggestions currently displayed under `side`'s field.
    #[must_use]
    pub fn visible_suggestions(&self, side: Side) -> &[&'a str] {
        self.field(side).visible()
    }

    /// Field that holds input focus, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<Side> {
        self.focus
    }

    /// Result currently on display.
    #[must_use]
    pub const fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref()
    }

    /// Pending validation message, if the last compare failed.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Acknowledge the pending validation message.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Replace `side`'s text, recompute its suggestions, and open its list.
    pub fn edit(&mut self, side: Side, text: impl Into<String>) {
        let text = text.into();
        let battle = self.battle;
        let suggestions = battle.suggest(&text);
        let field = self.field_mut(side);
        *field = EntryField {
            text,
            suggestions,
            open: true,
        };
    }

    /// Move focus to `side` and open its list.
    pub fn focus(&mut self, side: Side) {
        self.focus = Some(side);
        self.field_mut(side).open = true;
    }

    /// Accept the suggestion `name` for `side`.
    ///
    /// The field text becomes the canonical name and the list closes.
    /// Accepting for A moves focus to B.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `name` is not among `side`'s current suggestions.
    pub fn select_suggestion(&mut self, side: Side, name: &str) -> Result<(), BattleError> {
        let Some(&canonical) = self.field(side).suggestions().iter().find(|s| **s == name) else {
            return Err(BattleError::invalid_arg(format!(
                "{name} is not a current suggestion"
            )));
        };
        self.accept(side, canonical);
        Ok(())
    }

    /// Accept the suggestion at `index` for `side`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `index` is out of range.
    pub fn select_index(&mut self, side: Side, index: usize) -> Result<(), BattleError> {
        let Some(&canonical) = self.field(side).suggestions().get(index) else {
            return Err(BattleError::invalid_arg(format!(
                "suggestion index {index} out of range"
            )));
        };
        self.accept(side, canonical);
        Ok(())
    }

    fn accept(&mut self, side: Side, canonical: &'a str) {
        let battle = self.battle;
        let suggestions = battle.suggest(canonical);
        *self.field_mut(side) = EntryField {
            text: canonical.to_string(),
            suggestions,
            open: false,
        };
        if side == Side::A {
            self.focus(Side::B);
        }
    }

    /// Run the comparison on the two current texts.
    ///
    /// On success the new result replaces the old one and any alert clears.
    /// On failure the alert is set and the previous result stays.
    ///
    /// # Errors
    /// Returns `Unresolved` if either text does not name a dataset company.
    pub fn compare(&mut self) -> Result<&ComparisonResult, BattleError> {
        match self.battle.compare(&self.a.text, &self.b.text) {
            Ok(result) => {
                self.alert = None;
                Ok(&*self.result.insert(result))
            }
            Err(e) => {
                self.alert = Some(e.to_string());
                Err(e)
            }
        }
    }
}
