/// License reconciliation domain layer
///
/// Pure business logic: snapshot model, entitlement and ranking policies,
/// and the stateless services the reconciliation use case sequences.
pub mod domain;
pub mod policies;
pub mod services;
