use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the bizbattle workspace.
///
/// The comparison flow has exactly one user-facing failure, an unresolved
/// company name. The remaining variants cover construction and configuration
/// problems that never reach the interactive surface.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BattleError {
    /// One or both inputs did not match a dataset entry.
    ///
    /// Which side failed is intentionally not part of the message; the raw
    /// inputs are carried for diagnostics only.
    #[error("Please enter valid company names ({})", join_names(.valid))]
    Unresolved {
        /// Raw text entered for company A.
        input_a: String,
        /// Raw text entered for company B.
        input_b: String,
        /// Canonical names that would have been accepted, in dataset order.
        valid: Vec<String>,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BattleError {
    /// Helper: build an `Unresolved` error for the two raw inputs.
    pub fn unresolved<I, S>(input_a: impl Into<String>, input_b: impl Into<String>, valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Unresolved {
            input_a: input_a.into(),
            input_b: input_b.into(),
            valid: valid.into_iter().map(Into::into).collect(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Returns true if this error is the user-facing validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }
}

/// English list join: "A", "A or B", "A, B, or C".
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_message_lists_every_valid_name() {
        let e = BattleError::unresolved(
            "nope",
            "Apple",
            ["Apple", "Microsoft", "Google", "Amazon", "Meta"],
        );
        assert_eq!(
            e.to_string(),
            "Please enter valid company names (Apple, Microsoft, Google, Amazon, or Meta)"
        );
        assert!(e.is_validation());
    }

    #[test]
    fn short_name_lists() {
        assert_eq!(join_names(&[]), "");
        assert_eq!(join_names(&["A".into()]), "A");
        assert_eq!(join_names(&["A".into(), "B".into()]), "A or B");
    }

    #[test]
    fn invalid_arg_is_not_validation() {
        assert!(!BattleError::invalid_arg("empty dataset").is_validation());
    }
}
