use crate::ports::outbound::LockfileReader;
use crate::shared::error::AuditError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// File name of the lock manifest inside a project directory
pub const LOCKFILE_NAME: &str = "package-lock.json";

/// FileSystemReader adapter for loading JSON documents from the file system
///
/// This adapter implements the LockfileReader port and is also used by the
/// node_modules scanner to load each package.json it finds.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a whole file and parses it as JSON.
    ///
    /// Symbolic links are followed; files above `MAX_FILE_SIZE` are refused.
    /// Read failures map to `AuditError::FileReadError`, malformed content to
    /// `AuditError::JsonParseError`; both carry the offending path.
    pub fn load_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = self.safe_read_file(path).map_err(|e| AuditError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            AuditError::JsonParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let description = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file_size = validate_regular_file(path, &description)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<serde_json::Value> {
        let lockfile_path = project_path.join(LOCKFILE_NAME);

        if !lockfile_path.exists() {
            return Err(AuditError::LockfileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "package-lock.json does not exist in project directory \"{}\".\n   \
                     Run `npm install` to generate it, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        self.load_json(&lockfile_path)
    }
}
