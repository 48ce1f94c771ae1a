mod enterprise_gate;
mod entitlement_calculator;
mod license_type_resolver;
mod primary_database_lookup;
mod snapshot_differ;

pub use enterprise_gate::{EnterpriseGate, EnterpriseTrigger};
pub use entitlement_calculator::EntitlementCalculator;
pub use license_type_resolver::LicenseTypeResolver;
pub use primary_database_lookup::PrimaryDatabaseLookup;
pub use snapshot_differ::{ActivationEvent, LicenseTransition, SnapshotDiff, SnapshotDiffer};
