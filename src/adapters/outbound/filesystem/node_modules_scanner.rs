use super::FileSystemReader;
use crate::audit::domain::PackageObservation;
use crate::ports::outbound::InstalledPackageReader;
use crate::shared::error::AuditError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory npm installs packages into
pub const INSTALL_ROOT_NAME: &str = "node_modules";

/// Package metadata file looked up in every candidate package directory
pub const MANIFEST_NAME: &str = "package.json";

/// The subset of package.json the audit cares about
///
/// Fields are kept as raw values: a `name` that is not a string falls back to
/// the directory name, and an `optionalDependencies` that is not an object
/// counts as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    name: Option<Value>,
    optional_dependencies: Option<Value>,
}

impl PackageManifest {
    fn name(&self) -> Option<&str> {
        self.name
            .as_ref()
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    fn optional_dependency_names(&self) -> impl Iterator<Item = &String> {
        self.optional_dependencies
            .as_ref()
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|dependencies| dependencies.keys())
    }
}

/// A package directory found during the walk, with its fallback name
struct Candidate {
    dir: PathBuf,
    dir_name: String,
}

/// NodeModulesScanner adapter for walking an npm installation tree
///
/// The walk uses an explicit worklist of `node_modules` directories, so deep
/// nesting never grows the call stack. Inside each one:
/// - entries starting with `.` are skipped (`.bin`, `.package-lock.json`, ...)
/// - `@scope` directories contribute each of their subdirectories as `@scope/name`
/// - every other directory is a candidate package
///
/// Each candidate's own `node_modules` is queued for the nested install tree.
/// Only real directories are followed; symbolic links are ignored.
pub struct NodeModulesScanner {
    reader: FileSystemReader,
}

impl NodeModulesScanner {
    pub fn new(reader: FileSystemReader) -> Self {
        Self { reader }
    }

    /// Lists the candidate package directories directly inside one `node_modules`.
    fn candidates_in(&self, install_dir: &Path) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for (name, path) in Self::visible_subdirectories(install_dir)? {
            if name.starts_with('@') {
                for (scoped_name, scoped_path) in Self::visible_subdirectories(&path)? {
                    candidates.push(Candidate {
                        dir: scoped_path,
                        dir_name: format!("{}/{}", name, scoped_name),
                    });
                }
            } else {
                candidates.push(Candidate {
                    dir: path,
                    dir_name: name,
                });
            }
        }

        Ok(candidates)
    }

    /// Non-hidden, non-symlink subdirectories of `dir` as (name, path) pairs.
    fn visible_subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        let entries = fs::read_dir(dir).map_err(|e| AuditError::FileReadError {
            path: dir.to_path_buf(),
            details: format!("Failed to list directory: {}", e),
        })?;

        let mut subdirectories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AuditError::FileReadError {
                path: dir.to_path_buf(),
                details: format!("Failed to read directory entry: {}", e),
            })?;

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            // DirEntry::file_type does not follow symlinks
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                subdirectories.push((name, entry.path()));
            }
        }

        Ok(subdirectories)
    }

    /// Loads the candidate's package.json, if it has one.
    fn observe(&self, candidate: &Candidate) -> Result<Option<PackageObservation>> {
        let manifest_path = candidate.dir.join(MANIFEST_NAME);
        if !manifest_path.exists() {
            return Ok(None);
        }

        let manifest: PackageManifest = self.reader.load_json(&manifest_path)?;
        let package_name = manifest.name().unwrap_or(candidate.dir_name.as_str());

        Ok(Some(PackageObservation::new(
            package_name,
            manifest.optional_dependency_names().cloned(),
        )))
    }
}

impl Default for NodeModulesScanner {
    fn default() -> Self {
        Self::new(FileSystemReader::new())
    }
}

impl InstalledPackageReader for NodeModulesScanner {
    fn scan(&self, install_root: &Path) -> Result<Vec<PackageObservation>> {
        let mut observations = Vec::new();
        if !install_root.is_dir() {
            return Ok(observations);
        }

        let mut worklist = vec![install_root.to_path_buf()];
        while let Some(install_dir) = worklist.pop() {
            for candidate in self.candidates_in(&install_dir)? {
                if let Some(observation) = self.observe(&candidate)? {
                    observations.push(observation);
                }

                let nested = candidate.dir.join(INSTALL_ROOT_NAME);
                if nested.is_dir() {
                    worklist.push(nested);
                }
            }
        }

        Ok(observations)
    }
}
