use super::database::DatabaseRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};

/// HostSnapshot - one inventory capture of one host at one instant
///
/// Snapshots are produced by the ingestion pipeline. The reconciliation
/// engine only annotates the license entries of the current snapshot; the
/// previous snapshot is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    pub hostname: String,
    pub environment: String,
    pub captured_at: DateTime<Utc>,
    pub cpu_cores: u32,
    #[serde(default)]
    pub cpu_sockets: u32,
    /// e.g. `PH` for bare metal, or the name of a virtualization platform
    #[serde(default)]
    pub hardware_abstraction_technology: String,
    #[serde(default)]
    pub databases: Vec<DatabaseRecord>,
    /// Databases observed running but not otherwise enumerated
    #[serde(default)]
    pub unlisted_running_databases: BTreeSet<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HostSnapshot {
    pub fn new(
        hostname: impl Into<String>,
        environment: impl Into<String>,
        captured_at: DateTime<Utc>,
        cpu_cores: u32,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            environment: environment.into(),
            captured_at,
            cpu_cores,
            cpu_sockets: 0,
            hardware_abstraction_technology: String::new(),
            databases: Vec::new(),
            unlisted_running_databases: BTreeSet::new(),
            extra: Map::new(),
        }
    }

    pub fn with_database(mut self, database: DatabaseRecord) -> Self {
        self.databases.push(database);
        self
    }

    pub fn with_hardware_abstraction_technology(mut self, technology: impl Into<String>) -> Self {
        self.hardware_abstraction_technology = technology.into();
        self
    }

    pub fn with_unlisted_running_database(mut self, name: impl Into<String>) -> Self {
        self.unlisted_running_databases.insert(name.into());
        self
    }

    /// Database named `name`; the last record wins when the name repeats
    pub fn database(&self, name: &str) -> Option<&DatabaseRecord> {
        self.databases.iter().rev().find(|db| db.name == name)
    }

    /// Databases keyed by name, the last record winning on duplicates
    pub fn databases_by_name(&self) -> HashMap<&str, &DatabaseRecord> {
        self.databases
            .iter()
            .map(|db| (db.name.as_str(), db))
            .collect()
    }

    pub fn has_secondary_databases(&self) -> bool {
        self.databases.iter().any(DatabaseRecord::is_secondary)
    }
}
