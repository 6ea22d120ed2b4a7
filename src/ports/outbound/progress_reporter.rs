/// ProgressReporter port for user-facing progress during operations
///
/// This is the console channel (what the operator sees while a refresh or
/// scan runs). Diagnostics go through `tracing` instead.
///
/// Implementations must be `Send + Sync` because reports are emitted from
/// concurrently running per-instance tasks.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a count
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
