mod core_factor;
mod license_type_priority;

pub use core_factor::CoreFactorPolicy;
pub use license_type_priority::{LicenseTypeMetrics, LicenseTypePriority};
