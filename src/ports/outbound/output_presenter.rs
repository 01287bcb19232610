use crate::shared::Result;

/// OutputPresenter port for presenting the final audit result line
pub trait OutputPresenter {
    /// Presents the result message to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
