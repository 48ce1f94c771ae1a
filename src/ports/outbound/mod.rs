/// Outbound ports (driven ports)
///
/// Interfaces the reconciliation core uses to reach the fleet inventory,
/// the license-type catalog, the alerting sink and the local console and
/// file system.
pub mod alert_emitter;
pub mod license_type_repository;
pub mod output_presenter;
pub mod primary_database_repository;
pub mod progress_reporter;
pub mod snapshot_reader;

pub use alert_emitter::AlertEmitter;
pub use license_type_repository::LicenseTypeRepository;
pub use output_presenter::OutputPresenter;
pub use primary_database_repository::PrimaryDatabaseRepository;
pub use progress_reporter::ProgressReporter;
pub use snapshot_reader::SnapshotReader;
