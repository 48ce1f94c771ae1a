use serde::{Deserialize, Serialize};

/// LicenseTypeCatalogEntry - reference data describing one license type
///
/// `aliases` lists the license names, as reported by the inventory probe,
/// that map onto this entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTypeCatalogEntry {
    pub id: String,
    #[serde(default)]
    pub item_description: String,
    pub metric: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub option: bool,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl LicenseTypeCatalogEntry {
    pub fn new(id: impl Into<String>, metric: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            id: id.into(),
            item_description: String::new(),
            metric: metric.into(),
            cost: 0.0,
            option: false,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Literal, case-sensitive alias match
    pub fn has_alias(&self, license_name: &str) -> bool {
        self.aliases.iter().any(|alias| alias == license_name)
    }
}
