//! Configuration file support for the reconciler.
//!
//! Provides YAML-based configuration through `license-reconciler.config.yml`
//! files: the remote service endpoints, the license metric priority lists
//! and the core factor table.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::ServiceEndpoint;
use crate::license_reconciliation::policies::{CoreFactorPolicy, LicenseTypeMetrics};
use crate::shared::error::ReconcileError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-reconciler.config.yml";

const DEFAULT_API_ENDPOINT: &str = "http://localhost:11113";
const DEFAULT_ALERT_ENDPOINT: &str = "http://localhost:11114";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CORE_FACTOR: f64 = 1.0;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_service: Option<ServiceConfig>,
    pub alert_service: Option<ServiceConfig>,
    pub license_type_metrics_default: Option<Vec<String>>,
    #[serde(default)]
    pub license_type_metrics_by_environment: HashMap<String, Vec<String>>,
    pub core_factors: Option<CoreFactorsConfig>,
    pub http_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Endpoint and basic-auth credentials of a remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub remote_endpoint: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<ServiceConfig> for ServiceEndpoint {
    fn from(config: ServiceConfig) -> Self {
        ServiceEndpoint::new(config.remote_endpoint, config.username, config.password)
    }
}

/// Core factor table keyed by hardware abstraction technology.
#[derive(Debug, Deserialize, Default)]
pub struct CoreFactorsConfig {
    pub default: Option<f64>,
    #[serde(default)]
    pub by_technology: HashMap<String, f64>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ReconcileError::ConfigReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReconcileError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(message: String) -> anyhow::Error {
    ReconcileError::InvalidConfig { message }.into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (section, service) in [
        ("api_service", &config.api_service),
        ("alert_service", &config.alert_service),
    ] {
        if let Some(service) = service {
            if service.remote_endpoint.trim().is_empty() {
                return Err(invalid(format!(
                    "{}.remote_endpoint must not be empty",
                    section
                )));
            }
        }
    }

    if config.http_timeout_secs == Some(0) {
        return Err(invalid(
            "http_timeout_secs must be greater than 0".to_string(),
        ));
    }

    if let Some(core_factors) = &config.core_factors {
        build_core_factor_policy(core_factors)?;
    }

    Ok(())
}

fn build_core_factor_policy(config: &CoreFactorsConfig) -> Result<CoreFactorPolicy> {
    CoreFactorPolicy::new(
        config.default.unwrap_or(DEFAULT_CORE_FACTOR),
        config.by_technology.clone(),
    )
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored");
    }
}

/// Effective settings after applying defaults to an optional config file
#[derive(Debug, Clone)]
pub struct ReconcilerSettings {
    pub api_service: ServiceEndpoint,
    pub alert_service: ServiceEndpoint,
    pub license_type_metrics: LicenseTypeMetrics,
    pub core_factors: CoreFactorPolicy,
    pub http_timeout: Duration,
}

impl ReconcilerSettings {
    pub fn from_config(config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let api_service = config
            .api_service
            .map(ServiceEndpoint::from)
            .unwrap_or_else(|| ServiceEndpoint::new(DEFAULT_API_ENDPOINT, "", ""));
        let alert_service = config
            .alert_service
            .map(ServiceEndpoint::from)
            .unwrap_or_else(|| ServiceEndpoint::new(DEFAULT_ALERT_ENDPOINT, "", ""));

        let defaults = LicenseTypeMetrics::default();
        let license_type_metrics = LicenseTypeMetrics::new(
            config
                .license_type_metrics_default
                .unwrap_or(defaults.default),
            config.license_type_metrics_by_environment,
        );

        let core_factors = match &config.core_factors {
            Some(core_factors) => build_core_factor_policy(core_factors)?,
            None => CoreFactorPolicy::default(),
        };

        Ok(Self {
            api_service,
            alert_service,
            license_type_metrics,
            core_factors,
            http_timeout: Duration::from_secs(
                config.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
        })
    }
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            api_service: ServiceEndpoint::new(DEFAULT_API_ENDPOINT, "", ""),
            alert_service: ServiceEndpoint::new(DEFAULT_ALERT_ENDPOINT, "", ""),
            license_type_metrics: LicenseTypeMetrics::default(),
            core_factors: CoreFactorPolicy::default(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
api_service:
  remote_endpoint: "https://api.example.com"
  username: reader
  password: secret
alert_service:
  remote_endpoint: "https://alerts.example.com"
license_type_metrics_default:
  - Processor Perpetual
  - Named User Plus Perpetual
license_type_metrics_by_environment:
  DEV:
    - Named User Plus Perpetual
core_factors:
  default: 1.0
  by_technology:
    VMWARE: 0.5
http_timeout_secs: 10
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        let api = config.api_service.as_ref().unwrap();
        assert_eq!(api.remote_endpoint, "https://api.example.com");
        assert_eq!(api.username, "reader");
        assert_eq!(
            config.alert_service.as_ref().unwrap().password,
            ""
        );
        assert_eq!(
            config.license_type_metrics_default.as_deref(),
            Some(
                &[
                    "Processor Perpetual".to_string(),
                    "Named User Plus Perpetual".to_string()
                ][..]
            )
        );
        assert_eq!(config.http_timeout_secs, Some(10));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_settings_from_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
api_service:
  remote_endpoint: "https://api.example.com"
license_type_metrics_by_environment:
  DEV:
    - Named User Plus Perpetual
core_factors:
  by_technology:
    VMWARE: 0.5
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        let settings = ReconcilerSettings::from_config(Some(config)).unwrap();

        assert_eq!(
            settings.api_service.remote_endpoint,
            "https://api.example.com"
        );
        assert_eq!(settings.alert_service.remote_endpoint, DEFAULT_ALERT_ENDPOINT);
        assert_eq!(settings.core_factors.core_factor("VMWARE"), 0.5);
        assert_eq!(settings.core_factors.core_factor("PH"), 1.0);
        assert_eq!(
            settings.license_type_metrics.for_environment("DEV"),
            &["Named User Plus Perpetual".to_string()][..]
        );
        assert_eq!(
            settings.license_type_metrics.for_environment("PRD")[0],
            "Processor Perpetual"
        );
        assert_eq!(
            settings.http_timeout,
            Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_settings_without_config_use_defaults() {
        let settings = ReconcilerSettings::from_config(None).unwrap();
        assert_eq!(settings.api_service.remote_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(settings.core_factors, CoreFactorPolicy::default());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "http_timeout_secs: 5\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.http_timeout_secs, Some(5));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_core_factor_out_of_range_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
core_factors:
  by_technology:
    VMWARE: 1.5
"#,
        );

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must be between 0 and 1"));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
alert_service:
  remote_endpoint: "  "
"#,
        );

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("alert_service.remote_endpoint must not be empty"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "http_timeout_secs: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("http_timeout_secs"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
http_timeout_secs: 5
unknown_field: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }
}
