use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Technology tag attached to database alerts
pub const TECHNOLOGY_ORACLE_DATABASE: &str = "Oracle/Database";

/// Origin of an alert. Everything raised by reconciliation is engine-generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertCategory {
    Engine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCode {
    #[serde(rename = "MISSING_PRIMARY_DATABASE")]
    MissingPrimaryDatabase,
    #[serde(rename = "NEW_DATABASE")]
    NewDatabaseDiscovered,
    #[serde(rename = "NEW_LICENSE")]
    NewEnterpriseLicenseRequired,
    #[serde(rename = "NEW_OPTION")]
    ActivatedFeatures,
    #[serde(rename = "UNLISTED_RUNNING_DATABASE")]
    UnlistedRunningDatabase,
}

impl AlertCode {
    /// Wire representation, as submitted to the alert service
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCode::MissingPrimaryDatabase => "MISSING_PRIMARY_DATABASE",
            AlertCode::NewDatabaseDiscovered => "NEW_DATABASE",
            AlertCode::NewEnterpriseLicenseRequired => "NEW_LICENSE",
            AlertCode::ActivatedFeatures => "NEW_OPTION",
            AlertCode::UnlistedRunningDatabase => "UNLISTED_RUNNING_DATABASE",
        }
    }

    pub fn severity(&self) -> AlertSeverity {
        match self {
            AlertCode::NewDatabaseDiscovered => AlertSeverity::Info,
            AlertCode::MissingPrimaryDatabase | AlertCode::UnlistedRunningDatabase => {
                AlertSeverity::Warning
            }
            AlertCode::NewEnterpriseLicenseRequired | AlertCode::ActivatedFeatures => {
                AlertSeverity::Critical
            }
        }
    }
}

impl fmt::Display for AlertCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Info => write!(f, "INFO"),
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    New,
}

/// Alert - an immutable finding handed to the alert emitter
///
/// Alerts are only built through the per-code constructors below, which fix
/// the category, severity, status and description format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    id: Uuid,
    alert_category: AlertCategory,
    alert_affected_technology: Option<String>,
    alert_code: AlertCode,
    alert_severity: AlertSeverity,
    alert_status: AlertStatus,
    description: String,
    date: DateTime<Utc>,
    other_info: BTreeMap<String, Value>,
}

impl Alert {
    fn build(
        code: AlertCode,
        description: String,
        date: DateTime<Utc>,
        other_info: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            alert_category: AlertCategory::Engine,
            alert_affected_technology: Some(TECHNOLOGY_ORACLE_DATABASE.to_string()),
            alert_code: code,
            alert_severity: code.severity(),
            alert_status: AlertStatus::New,
            description,
            date,
            other_info,
        }
    }

    fn host_info(hostname: &str) -> BTreeMap<String, Value> {
        let mut info = BTreeMap::new();
        info.insert("hostname".to_string(), Value::from(hostname));
        info
    }

    fn database_info(hostname: &str, dbname: &str) -> BTreeMap<String, Value> {
        let mut info = Self::host_info(hostname);
        info.insert("dbname".to_string(), Value::from(dbname));
        info
    }

    pub fn missing_primary_database(hostname: &str, dbname: &str, date: DateTime<Utc>) -> Self {
        Self::build(
            AlertCode::MissingPrimaryDatabase,
            format!("Missing primary database on standby database: {}", dbname),
            date,
            Self::database_info(hostname, dbname),
        )
    }

    pub fn new_database(hostname: &str, dbname: &str, date: DateTime<Utc>) -> Self {
        Self::build(
            AlertCode::NewDatabaseDiscovered,
            format!("The database {} was created on the server {}", dbname, hostname),
            date,
            Self::database_info(hostname, dbname),
        )
    }

    pub fn new_enterprise_license(hostname: &str, date: DateTime<Utc>) -> Self {
        Self::build(
            AlertCode::NewEnterpriseLicenseRequired,
            format!("The host {} has new Enterprise license", hostname),
            date,
            Self::host_info(hostname),
        )
    }

    pub fn activated_features(
        hostname: &str,
        dbname: &str,
        features: &[String],
        date: DateTime<Utc>,
    ) -> Self {
        let mut info = Self::database_info(hostname, dbname);
        info.insert("features".to_string(), Value::from(features.to_vec()));

        Self::build(
            AlertCode::ActivatedFeatures,
            format!(
                "The database {} on {} has enabled new features ({}) on server",
                dbname,
                hostname,
                features.join(", ")
            ),
            date,
            info,
        )
    }

    pub fn unlisted_running_database(hostname: &str, dbname: &str, date: DateTime<Utc>) -> Self {
        Self::build(
            AlertCode::UnlistedRunningDatabase,
            format!(
                "The database {} is not listed in the oratab of the host {}",
                dbname, hostname
            ),
            date,
            Self::database_info(hostname, dbname),
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn category(&self) -> AlertCategory {
        self.alert_category
    }

    pub fn affected_technology(&self) -> Option<&str> {
        self.alert_affected_technology.as_deref()
    }

    pub fn code(&self) -> AlertCode {
        self.alert_code
    }

    pub fn severity(&self) -> AlertSeverity {
        self.alert_severity
    }

    pub fn status(&self) -> AlertStatus {
        self.alert_status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn other_info(&self) -> &BTreeMap<String, Value> {
        &self.other_info
    }

    pub fn hostname(&self) -> Option<&str> {
        self.other_info.get("hostname").and_then(Value::as_str)
    }

    pub fn dbname(&self) -> Option<&str> {
        self.other_info.get("dbname").and_then(Value::as_str)
    }

    /// Feature names carried by an `ActivatedFeatures` alert
    pub fn features(&self) -> Vec<&str> {
        self.other_info
            .get("features")
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
