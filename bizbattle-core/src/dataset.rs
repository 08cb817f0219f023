//! Ordered, read-only company table.

use bizbattle_types::{BattleError, CompanyMetrics};

/// Ordered mapping from canonical company name to its metrics.
///
/// Iteration order is the insertion order and is observable through
/// suggestions and the validation message. Names are unique (case sensitive).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    entries: Vec<(String, CompanyMetrics)>,
}

impl Dataset {
    /// Build a dataset from explicit entries.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `entries` is empty or a name repeats.
    pub fn new<I, S>(entries: I) -> Result<Self, BattleError>
    where
        I: IntoIterator<Item = (S, CompanyMetrics)>,
        S: Into<String>,
    {
        let mut out: Vec<(String, CompanyMetrics)> = Vec::new();
        for (name, metrics) in entries {
            let name = name.into();
            if out.iter().any(|(n, _)| *n == name) {
                return Err(BattleError::invalid_arg(format!(
                    "duplicate company name: {name}"
                )));
            }
            out.push((name, metrics));
        }
        if out.is_empty() {
            return Err(BattleError::invalid_arg("dataset has no companies"));
        }
        Ok(Self { entries: out })
    }

    /// The five built-in companies.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(name, m)| ((*name).to_string(), *m))
                .collect(),
        }
    }

    /// Metrics for an exact canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CompanyMetrics> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, m)| m)
    }

    /// Canonical names in dataset order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Entries in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompanyMetrics)> {
        self.entries.iter().map(|(n, m)| (n.as_str(), m))
    }

    /// Number of companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed dataset; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: [(&str, CompanyMetrics); 5] = [
    (
        "Apple",
        CompanyMetrics {
            revenue: 394.33,
            market_cap: 2940.0,
            employees: 164_000,
            profit: 99.8,
            growth: 8.1,
        },
    ),
    (
        "Microsoft",
        CompanyMetrics {
            revenue: 211.92,
            market_cap: 2750.0,
            employees: 221_000,
            profit: 72.4,
            growth: 16.4,
        },
    ),
    (
        "Google",
        CompanyMetrics {
            revenue: 282.84,
            market_cap: 1890.0,
            employees: 156_000,
            profit: 59.97,
            growth: 13.8,
        },
    ),
    (
        "Amazon",
        CompanyMetrics {
            revenue: 513.98,
            market_cap: 1680.0,
            employees: 1_540_000,
            profit: 30.43,
            growth: 9.4,
        },
    ),
    (
        "Meta",
        CompanyMetrics {
            revenue: 116.61,
            market_cap: 1020.0,
            employees: 86_482,
            profit: 39.1,
            growth: 15.7,
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn m(revenue: f64) -> CompanyMetrics {
        CompanyMetrics {
            revenue,
            market_cap: 1.0,
            employees: 1,
            profit: 1.0,
            growth: 1.0,
        }
    }

    #[test]
    fn builtin_order_is_stable() {
        let ds = Dataset::builtin();
        let names: Vec<&str> = ds.names().collect();
        assert_eq!(names, ["Apple", "Microsoft", "Google", "Amazon", "Meta"]);
        assert_eq!(ds.len(), 5);
        assert!(!ds.is_empty());
    }

    #[test]
    fn get_is_case_sensitive() {
        let ds = Dataset::builtin();
        assert_eq!(ds.get("Amazon").map(|m| m.employees), Some(1_540_000));
        assert!(ds.get("amazon").is_none());
    }

    #[test]
    fn rejects_duplicates_and_empty() {
        let dup = Dataset::new([("Acme", m(1.0)), ("Acme", m(2.0))]);
        assert!(matches!(dup, Err(BattleError::InvalidArg(_))));

        let empty = Dataset::new(Vec::<(String, CompanyMetrics)>::new());
        assert!(matches!(empty, Err(BattleError::InvalidArg(_))));
    }

    #[test]
    fn names_differing_only_in_case_are_distinct_keys() {
        let ds = Dataset::new([("Acme", m(1.0)), ("ACME", m(2.0))]).unwrap();
        assert_eq!(ds.len(), 2);
    }
}
