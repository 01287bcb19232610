use crate::application::dto::{AuditRequest, AuditResponse};
use crate::audit::domain::OptionalDependencyMap;
use crate::audit::services::{LockIndexer, OptionalDependencyChecker};
use crate::ports::outbound::{InstalledPackageReader, LockfileReader, ProgressReporter};
use crate::shared::Result;

/// AuditOptionalDependenciesUseCase - Core use case for the optional dependency audit
///
/// Loads the lockfile, indexes it, scans the installation tree and compares
/// the two. Every missing optional dependency is reported as a warning the
/// moment it is found; the response carries the full list for the summary.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `IPR` - InstalledPackageReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AuditOptionalDependenciesUseCase<LR, IPR, PR> {
    lockfile_reader: LR,
    installed_package_reader: IPR,
    progress_reporter: PR,
}

impl<LR, IPR, PR> AuditOptionalDependenciesUseCase<LR, IPR, PR>
where
    LR: LockfileReader,
    IPR: InstalledPackageReader,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies
    pub fn new(lockfile_reader: LR, installed_package_reader: IPR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            installed_package_reader,
            progress_reporter,
        }
    }

    /// Executes the audit
    ///
    /// # Errors
    /// Returns an error if the lockfile or any package.json cannot be read or parsed
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Load and index the lockfile
        self.progress_reporter.report(&format!(
            "📖 Loading package-lock.json from: {}",
            request.project_path.display()
        ));
        let document = self.lockfile_reader.read_lockfile(&request.project_path)?;
        let lockfile_version = LockIndexer::lockfile_version(&document);
        let lock_index = LockIndexer::index(&document);
        self.progress_reporter.report(&format!(
            "✅ Indexed {} locked package(s) (lockfileVersion {})",
            lock_index.len(),
            lockfile_version
        ));

        // Step 2: Scan the installation tree
        let install_root = request.install_root();
        self.progress_reporter
            .report(&format!("🔍 Scanning {}", install_root.display()));
        let observations = self.installed_package_reader.scan(&install_root)?;
        let declared = OptionalDependencyMap::from_observations(observations);
        self.progress_reporter.report(&format!(
            "✅ Found {} installed package(s) declaring {} optional dependency(ies)",
            declared.package_count(),
            declared.declaration_count()
        ));

        // Step 3: Compare, streaming each finding
        let missing = OptionalDependencyChecker::check(&declared, &lock_index, |finding| {
            self.progress_reporter
                .report_warning(&format!("⚠️  Warning: {}", finding));
        });

        Ok(AuditResponse::new(
            lock_index.len(),
            declared.package_count(),
            missing,
        ))
    }
}
