/// Use cases orchestrating the reconciliation domain through ports
mod reconcile_host;

pub use reconcile_host::ReconcileHostUseCase;
