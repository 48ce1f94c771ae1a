use serde::{de, Deserialize, Deserializer, Serialize};

/// Edition name reported for Oracle Enterprise Edition
pub const ENTERPRISE_EDITION: &str = "Oracle ENT";
/// Edition name reported for Oracle Standard Edition
pub const STANDARD_EDITION: &str = "Oracle STD";
/// Edition name reported for Oracle Express Edition
pub const EXPRESS_EDITION: &str = "Oracle EXE";

/// The three edition tiers. They denote the product edition itself rather
/// than an optional chargeable feature.
pub const BASELINE_EDITIONS: [&str; 3] = [ENTERPRISE_EDITION, STANDARD_EDITION, EXPRESS_EDITION];

/// Returns true when `name` is one of the baseline editions
pub fn is_baseline_edition(name: &str) -> bool {
    BASELINE_EDITIONS.contains(&name)
}

/// LicenseEntry - one chargeable feature or edition carried by a database
///
/// `count` is expressed in the licensable metric (e.g. per core). A positive
/// count means the feature is in use; zero means it is not. Negative counts
/// are rejected when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseEntry {
    pub name: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub count: f64,
    /// Catalog identifier, set by license type resolution
    #[serde(
        default,
        rename = "licenseTypeID",
        skip_serializing_if = "Option::is_none"
    )]
    pub license_type_id: Option<String>,
}

impl LicenseEntry {
    pub fn new(name: impl Into<String>, count: f64) -> Self {
        Self {
            name: name.into(),
            count,
            license_type_id: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.count > 0.0
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = f64::deserialize(deserializer)?;
    if !count.is_finite() || count < 0.0 {
        return Err(de::Error::custom(format!(
            "license count must be a non-negative number, got {}",
            count
        )));
    }
    Ok(count)
}
