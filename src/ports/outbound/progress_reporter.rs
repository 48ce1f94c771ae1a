/// ProgressReporter port for batch progress feedback
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many of `total` hosts have been reconciled
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error
    fn report_error(&self, message: &str);

    /// Reports completion of the batch
    fn report_completion(&self, message: &str);
}
