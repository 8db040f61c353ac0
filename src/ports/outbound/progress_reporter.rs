/// ProgressReporter port for reporting progress during an import
///
/// This port abstracts progress reporting (e.g., to stderr) so the use case
/// can describe what it is doing without knowing where the text goes.
/// Credentials must never be passed to a reporter.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a warning that does not stop the import
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
