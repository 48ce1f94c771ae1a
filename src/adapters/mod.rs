/// Adapters layer - infrastructure implementations
///
/// Concrete implementations of the outbound ports, integrating the
/// reconciliation core with HTTP services, files and the console.
pub mod outbound;
