/// Network adapters for the API and alert services
mod alert_service_client;
mod fleet_database_client;
mod license_type_client;
mod service_endpoint;

pub use alert_service_client::AlertServiceClient;
pub use fleet_database_client::FleetDatabaseClient;
pub use license_type_client::LicenseTypeClient;
pub use service_endpoint::ServiceEndpoint;
