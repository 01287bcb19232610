use crate::audit::domain::MissingOptionalDependency;

/// AuditResponse - outcome of one audit run
///
/// Holds the findings in the order they were reported. The run passes when
/// there are none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditResponse {
    /// Number of distinct package names in the lockfile
    pub locked_package_count: usize,
    /// Number of distinct installed package names with a package.json
    pub installed_package_count: usize,
    /// Optional dependencies declared by installed packages but not locked
    pub missing: Vec<MissingOptionalDependency>,
}

impl AuditResponse {
    pub fn new(
        locked_package_count: usize,
        installed_package_count: usize,
        missing: Vec<MissingOptionalDependency>,
    ) -> Self {
        Self {
            locked_package_count,
            installed_package_count,
            missing,
        }
    }

    pub fn all_satisfied(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}
