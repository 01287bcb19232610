use std::fmt;

/// An optional dependency declared by an installed package but absent from the lockfile
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MissingOptionalDependency {
    /// Package whose metadata declares the optional dependency
    pub package: String,
    /// Name of the optional dependency not found in the lockfile
    pub dependency: String,
}

impl MissingOptionalDependency {
    pub fn new(package: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            dependency: dependency.into(),
        }
    }
}

impl fmt::Display for MissingOptionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" declares optional dependency \"{}\" which is missing from package-lock.json",
            self.package, self.dependency
        )
    }
}
