use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for loading the lock manifest
///
/// This port abstracts the file system operations needed to read and
/// parse package-lock.json from a project directory.
pub trait LockfileReader {
    /// Reads and parses package-lock.json from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing package-lock.json
    ///
    /// # Returns
    /// The parsed JSON document; its shape is interpreted by `LockIndexer`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package-lock.json file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid JSON
    fn read_lockfile(&self, project_path: &Path) -> Result<serde_json::Value>;
}
