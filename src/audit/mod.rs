/// Audit core - lockfile indexing and optional dependency comparison
///
/// Everything under this module is pure: it works on already-loaded values
/// and never touches the file system.
pub mod domain;
pub mod services;
