//! Free text to canonical name resolution.

use crate::dataset::Dataset;

/// Trim surrounding whitespace and lower-case.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve `input` to a canonical dataset name.
///
/// Matching is exact after normalization on both sides; the first key in
/// dataset order wins when several keys fold to the same lower-case form.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "bizbattle::matcher", level = "debug", skip(dataset), ret)
)]
#[must_use]
pub fn resolve<'a>(input: &str, dataset: &'a Dataset) -> Option<&'a str> {
    let needle = normalize(input);
    dataset.names().find(|name| name.to_lowercase() == needle)
}
