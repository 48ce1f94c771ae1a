/// Mock implementations for testing
mod mock_license_type_repository;
mod mock_primary_database_repository;
mod mock_progress_reporter;
mod recording_alert_emitter;

pub use mock_license_type_repository::MockLicenseTypeRepository;
pub use mock_primary_database_repository::MockPrimaryDatabaseRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use recording_alert_emitter::RecordingAlertEmitter;
