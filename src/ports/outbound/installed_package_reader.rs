use crate::audit::domain::PackageObservation;
use crate::shared::Result;
use std::path::Path;

/// InstalledPackageReader port for discovering installed packages
///
/// Implementations walk an installation root and return one observation per
/// package metadata file they find. Aggregation is left to the caller.
pub trait InstalledPackageReader {
    /// Scans the installation root for installed packages
    ///
    /// A missing or empty root yields no observations rather than an error.
    ///
    /// # Errors
    /// Returns an error if a package metadata file cannot be read or parsed
    fn scan(&self, install_root: &Path) -> Result<Vec<PackageObservation>>;
}
