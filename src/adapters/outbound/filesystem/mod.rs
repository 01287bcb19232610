/// Filesystem adapters for reading the lockfile and the installation tree
mod file_reader;
mod node_modules_scanner;

pub use file_reader::{FileSystemReader, LOCKFILE_NAME};
pub use node_modules_scanner::{NodeModulesScanner, INSTALL_ROOT_NAME, MANIFEST_NAME};
