mod lock_indexer;
mod optional_dependency_checker;

pub use lock_indexer::LockIndexer;
pub use optional_dependency_checker::OptionalDependencyChecker;
