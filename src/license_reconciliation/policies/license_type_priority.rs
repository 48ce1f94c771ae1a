use crate::license_reconciliation::domain::LicenseTypeCatalogEntry;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Per-environment ordering of license metrics
///
/// Each list names metrics from most to least preferred. Environments without
/// an explicit list use `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseTypeMetrics {
    pub default: Vec<String>,
    pub by_environment: HashMap<String, Vec<String>>,
}

impl LicenseTypeMetrics {
    pub fn new(default: Vec<String>, by_environment: HashMap<String, Vec<String>>) -> Self {
        Self {
            default,
            by_environment,
        }
    }

    /// Priority list that applies to `environment`
    pub fn for_environment(&self, environment: &str) -> &[String] {
        self.by_environment
            .get(environment)
            .map(Vec::as_slice)
            .unwrap_or(self.default.as_slice())
    }
}

impl Default for LicenseTypeMetrics {
    fn default() -> Self {
        Self {
            default: [
                "Processor Perpetual",
                "Named User Plus Perpetual",
                "Stream Perpetual",
                "Computer Perpetual",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
            by_environment: HashMap::new(),
        }
    }
}

/// LicenseTypePriority policy for ordering the license type catalog
///
/// Ranking rules:
/// 1. A metric at index `i` of a priority list of length `n` ranks `n - i`
/// 2. Metrics absent from the list rank 0, below every listed metric
/// 3. Entries of equal rank keep the order in which they were fetched
pub struct LicenseTypePriority;

impl LicenseTypePriority {
    /// Rank of `metric` within `priority`
    pub fn rank(metric: &str, priority: &[String]) -> usize {
        priority
            .iter()
            .position(|p| p == metric)
            .map(|index| priority.len() - index)
            .unwrap_or(0)
    }

    /// Orders the catalog by descending rank
    ///
    /// # Arguments
    /// * `catalog` - Catalog entries in fetch order
    /// * `priority` - Metric names, most preferred first
    ///
    /// # Returns
    /// The same entries, highest rank first
    pub fn order(
        mut catalog: Vec<LicenseTypeCatalogEntry>,
        priority: &[String],
    ) -> Vec<LicenseTypeCatalogEntry> {
        // sort_by_key is stable, so equal ranks keep fetch order
        catalog.sort_by_key(|entry| Reverse(Self::rank(&entry.metric, priority)));
        catalog
    }
}
