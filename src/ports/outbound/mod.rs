/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod installed_package_reader;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use installed_package_reader::InstalledPackageReader;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
