use super::license::{LicenseEntry, ENTERPRISE_EDITION};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Operational status of a database instance.
///
/// Values other than `OPEN` and `MOUNTED` are kept verbatim so that they
/// survive a round trip through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DatabaseStatus {
    Open,
    Mounted,
    Other(String),
}

impl From<String> for DatabaseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OPEN" => DatabaseStatus::Open,
            "MOUNTED" => DatabaseStatus::Mounted,
            _ => DatabaseStatus::Other(value),
        }
    }
}

impl From<DatabaseStatus> for String {
    fn from(status: DatabaseStatus) -> Self {
        match status {
            DatabaseStatus::Open => "OPEN".to_string(),
            DatabaseStatus::Mounted => "MOUNTED".to_string(),
            DatabaseStatus::Other(value) => value,
        }
    }
}

/// Replication role of a database instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DatabaseRole {
    Primary,
    PhysicalStandby,
    Other(String),
}

impl From<String> for DatabaseRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRIMARY" => DatabaseRole::Primary,
            "PHYSICAL_STANDBY" => DatabaseRole::PhysicalStandby,
            _ => DatabaseRole::Other(value),
        }
    }
}

impl From<DatabaseRole> for String {
    fn from(role: DatabaseRole) -> Self {
        match role {
            DatabaseRole::Primary => "PRIMARY".to_string(),
            DatabaseRole::PhysicalStandby => "PHYSICAL_STANDBY".to_string(),
            DatabaseRole::Other(value) => value,
        }
    }
}

/// DatabaseRecord - one Oracle database instance inside a host snapshot
///
/// Identity across snapshots and hosts is the `(db_id, name)` pair.
/// Fields of the inventory document that are not modelled here are kept in
/// `extra` and written back unchanged on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseRecord {
    pub name: String,
    #[serde(rename = "dbID")]
    pub db_id: u64,
    pub status: DatabaseStatus,
    pub role: DatabaseRole,
    #[serde(default)]
    pub licenses: Vec<LicenseEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DatabaseRecord {
    pub fn new(
        name: impl Into<String>,
        db_id: u64,
        status: DatabaseStatus,
        role: DatabaseRole,
    ) -> Self {
        Self {
            name: name.into(),
            db_id,
            status,
            role,
            licenses: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Adds a license entry, builder style
    pub fn with_license(mut self, name: impl Into<String>, count: f64) -> Self {
        self.licenses.push(LicenseEntry::new(name, count));
        self
    }

    pub fn identity(&self) -> (u64, &str) {
        (self.db_id, &self.name)
    }

    /// A mounted, non-primary instance. Its licenses are derived from its primary.
    pub fn is_secondary(&self) -> bool {
        self.status == DatabaseStatus::Mounted && self.role != DatabaseRole::Primary
    }

    pub fn is_open_primary(&self) -> bool {
        self.status == DatabaseStatus::Open && self.role == DatabaseRole::Primary
    }

    pub fn has_enterprise_license(&self) -> bool {
        self.licenses
            .iter()
            .any(|l| l.name == ENTERPRISE_EDITION && l.is_active())
    }

    pub fn license(&self, name: &str) -> Option<&LicenseEntry> {
        self.licenses.iter().find(|l| l.name == name)
    }
}
