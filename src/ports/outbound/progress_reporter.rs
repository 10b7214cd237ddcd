/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts diagnostic output (normally stderr) so the domain
/// services stay pure; notably, the license gap report renders through this
/// port instead of printing during the audit walk.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position within a known total
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
