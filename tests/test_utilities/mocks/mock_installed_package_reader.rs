use optdeps_audit::prelude::*;
use std::path::Path;

/// Mock InstalledPackageReader returning a fixed list of observations
#[derive(Default)]
pub struct MockInstalledPackageReader {
    observations: Vec<PackageObservation>,
    should_fail: bool,
}

impl MockInstalledPackageReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, optional_dependencies: &[&str]) -> Self {
        self.observations.push(PackageObservation::new(
            name,
            optional_dependencies.iter().copied(),
        ));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            observations: Vec::new(),
            should_fail: true,
        }
    }
}

impl InstalledPackageReader for MockInstalledPackageReader {
    fn scan(&self, _install_root: &Path) -> Result<Vec<PackageObservation>> {
        if self.should_fail {
            anyhow::bail!("Mock package.json parse failure");
        }
        Ok(self.observations.clone())
    }
}
