/// Mock implementations for testing
mod mock_installed_package_reader;
mod mock_lockfile_reader;
mod mock_progress_reporter;

pub use mock_installed_package_reader::MockInstalledPackageReader;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_progress_reporter::MockProgressReporter;
