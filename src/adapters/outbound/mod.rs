/// Outbound adapters - infrastructure implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod network;
