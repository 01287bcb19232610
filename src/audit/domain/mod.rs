pub mod lock_index;
pub mod missing_dependency;
pub mod optional_dependencies;

pub use lock_index::LockIndex;
pub use missing_dependency::MissingOptionalDependency;
pub use optional_dependencies::{OptionalDependencyMap, PackageObservation};
