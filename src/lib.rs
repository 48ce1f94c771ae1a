//! oracle-license-reconciler - Oracle license reconciliation and change alerting
//!
//! Takes successive inventory snapshots of a host, fills in the licenses that
//! standby databases inherit from their primaries, resolves catalog license
//! types and raises alerts for license-relevant changes.
//!
//! # Architecture
//!
//! The library follows hexagonal architecture:
//!
//! - **Domain Layer** (`license_reconciliation`): snapshots, alerts, policies
//!   and the pure reconciliation services
//! - **Application Layer** (`application`): the reconcile use case and DTOs
//! - **Ports** (`ports`): interfaces to remote services, files and console
//! - **Adapters** (`adapters`): HTTP, filesystem and console implementations
//! - **Shared** (`shared`): error types, result alias and logging setup
//!
//! # Example
//!
//! ```no_run
//! use oracle_license_reconciler::prelude::*;
//! use std::path::Path;
//!
//! # async fn example() -> Result<()> {
//! let settings = ReconcilerSettings::default();
//!
//! let use_case = ReconcileHostUseCase::new(
//!     FleetDatabaseClient::new(settings.api_service.clone(), settings.http_timeout)?,
//!     LicenseTypeClient::new(settings.api_service.clone(), settings.http_timeout)?,
//!     ConsoleAlertEmitter::new(),
//!     settings.license_type_metrics,
//!     settings.core_factors,
//! );
//!
//! let reader = FileSystemReader::new();
//! let current = reader.read_snapshot(Path::new("ora-prod-01.json"))?;
//! let previous = reader.read_snapshot(Path::new("ora-prod-01.previous.json"))?;
//!
//! let response = use_case
//!     .execute(ReconcileRequest::new(current, Some(previous))?)
//!     .await;
//! println!("{} alert(s)", response.alerts.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_reconciliation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleAlertEmitter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{
        AlertServiceClient, FleetDatabaseClient, LicenseTypeClient, ServiceEndpoint,
    };
    pub use crate::application::dto::{ReconcileCheck, ReconcileRequest, ReconcileResponse};
    pub use crate::application::use_cases::ReconcileHostUseCase;
    pub use crate::config::ReconcilerSettings;
    pub use crate::license_reconciliation::domain::{
        Alert, AlertCode, AlertSeverity, DatabaseRecord, DatabaseRole, DatabaseStatus,
        HostSnapshot, LicenseEntry, LicenseTypeCatalogEntry,
    };
    pub use crate::license_reconciliation::policies::{
        CoreFactorPolicy, LicenseTypeMetrics, LicenseTypePriority,
    };
    pub use crate::license_reconciliation::services::{
        EnterpriseGate, EntitlementCalculator, LicenseTypeResolver, PrimaryDatabaseLookup,
        SnapshotDiffer,
    };
    pub use crate::ports::outbound::{
        AlertEmitter, LicenseTypeRepository, OutputPresenter, PrimaryDatabaseRepository,
        ProgressReporter, SnapshotReader,
    };
    pub use crate::shared::Result;
}
