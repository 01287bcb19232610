use crate::audit::domain::LockIndex;
use serde_json::Value;
use std::collections::HashSet;

/// Path segment npm uses for installed package directories
const INSTALL_DIR_MARKER: &str = "node_modules/";

/// Lockfiles written before `lockfileVersion` existed are treated as version 1
const DEFAULT_LOCKFILE_VERSION: u64 = 1;

/// LockIndexer service for turning a parsed package-lock.json into a LockIndex
///
/// Two document shapes are understood:
/// - version 2+: a flat `packages` object keyed by install path
///   (`node_modules/a/node_modules/@scope/b`)
/// - version 1: a nested `dependencies` object whose entries may carry their
///   own `dependencies`
///
/// A document matching neither shape yields an empty index.
pub struct LockIndexer;

impl LockIndexer {
    pub fn index(document: &Value) -> LockIndex {
        let version = Self::lockfile_version(document);

        if version >= 2 {
            if let Some(packages) = document.get("packages").and_then(Value::as_object) {
                return LockIndex::new(
                    packages
                        .keys()
                        .filter(|key| !key.is_empty())
                        .map(|key| Self::package_name_from_path(key).to_string())
                        .collect(),
                );
            }
        }

        match document.get("dependencies").and_then(Value::as_object) {
            Some(dependencies) => LockIndex::new(Self::collect_nested_names(dependencies)),
            None => LockIndex::default(),
        }
    }

    /// Reads `lockfileVersion`, falling back to 1 when absent or not an integer
    pub fn lockfile_version(document: &Value) -> u64 {
        document
            .get("lockfileVersion")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_LOCKFILE_VERSION)
    }

    /// Returns the part of an install path after the last `node_modules/`.
    ///
    /// Keys without the marker (workspace links such as `packages/app`) are
    /// returned unchanged.
    pub fn package_name_from_path(path: &str) -> &str {
        match path.rfind(INSTALL_DIR_MARKER) {
            Some(pos) => &path[pos + INSTALL_DIR_MARKER.len()..],
            None => path,
        }
    }

    /// Collects every key of a version 1 `dependencies` tree, at any depth.
    fn collect_nested_names(root: &serde_json::Map<String, Value>) -> HashSet<String> {
        let mut names = HashSet::new();
        let mut pending = vec![root];

        while let Some(dependencies) = pending.pop() {
            for (name, entry) in dependencies {
                names.insert(name.clone());
                if let Some(nested) = entry.get("dependencies").and_then(Value::as_object) {
                    pending.push(nested);
                }
            }
        }

        names
    }
}
