/// ProgressReporter port for reporting progress during an audit
///
/// Keeps progress and warning output off stdout, which is reserved for the
/// final result line.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning. Warnings are never suppressed.
    fn report_warning(&self, message: &str);

    /// Reports the closing summary of a failed audit
    fn report_failure(&self, message: &str);
}
