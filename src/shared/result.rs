/// Crate-wide result type.
///
/// Adapters, configuration loading and the CLI driver propagate `anyhow::Error`
/// so that context can be attached with `?`. The reconciliation engine itself
/// absorbs collaborator failures and never returns one.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
