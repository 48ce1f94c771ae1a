pub mod alert;
pub mod database;
pub mod host_snapshot;
pub mod license;
pub mod license_type;

pub use alert::{Alert, AlertCategory, AlertCode, AlertSeverity, AlertStatus};
pub use database::{DatabaseRecord, DatabaseRole, DatabaseStatus};
pub use host_snapshot::HostSnapshot;
pub use license::{is_baseline_edition, LicenseEntry, BASELINE_EDITIONS, ENTERPRISE_EDITION};
pub use license_type::LicenseTypeCatalogEntry;
