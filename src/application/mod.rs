/// Application layer - use cases and DTOs
///
/// Orchestrates the reconciliation domain services and reaches
/// infrastructure only through the outbound ports.
pub mod dto;
pub mod use_cases;
