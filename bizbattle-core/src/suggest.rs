//! Prefix autocomplete over dataset names.

use crate::dataset::Dataset;
use crate::matcher::normalize;

/// Every canonical name starting with `input`, case-insensitively.
///
/// Blank input yields nothing. Results keep dataset order.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(target = "bizbattle::suggest", level = "trace", skip(dataset), ret)
)]
#[must_use]
pub fn suggest<'a>(input: &str, dataset: &'a Dataset) -> Vec<&'a str> {
    let prefix = normalize(input);
    if prefix.is_empty() {
        return Vec::new();
    }
    dataset
        .names()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect()
}
