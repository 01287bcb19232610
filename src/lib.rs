//! optdeps-audit - find optional dependencies missing from package-lock.json
//!
//! npm records platform-specific optional dependencies (native binaries such as
//! `@swc/core-darwin-arm64`) in package-lock.json only for the platforms it
//! resolved. A lockfile generated on one machine can therefore lack entries
//! that installed packages declare, which breaks `npm ci` elsewhere. This
//! library scans `node_modules`, collects every declared optional dependency
//! and reports those absent from the lockfile.
//!
//! # Architecture
//!
//! - **Audit core** (`audit`): lock indexing and comparison, no I/O
//! - **Application Layer** (`application`): the audit use case and its DTOs
//! - **Ports** (`ports`): interfaces for file system and console access
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use optdeps_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let reader = FileSystemReader::new();
//! let use_case = AuditOptionalDependenciesUseCase::new(
//!     reader,
//!     NodeModulesScanner::new(reader),
//!     StderrProgressReporter::new(false),
//! );
//!
//! let response = use_case.execute(AuditRequest::new(PathBuf::from(".")))?;
//! for missing in &response.missing {
//!     println!("{}", missing);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, NodeModulesScanner, INSTALL_ROOT_NAME, LOCKFILE_NAME, MANIFEST_NAME,
    };
    pub use crate::application::dto::{AuditRequest, AuditResponse};
    pub use crate::application::use_cases::AuditOptionalDependenciesUseCase;
    pub use crate::audit::domain::{
        LockIndex, MissingOptionalDependency, OptionalDependencyMap, PackageObservation,
    };
    pub use crate::audit::services::{LockIndexer, OptionalDependencyChecker};
    pub use crate::ports::outbound::{
        InstalledPackageReader, LockfileReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{AuditError, ExitCode};
    pub use crate::shared::Result;
}
