use crate::shared::Result;

/// OutputPresenter port for the reconciled snapshots
///
/// Abstracts where the serialized result ends up (stdout, a file).
pub trait OutputPresenter {
    /// Presents the serialized reconciliation output
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
