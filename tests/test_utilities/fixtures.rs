use std::fs;
use std::path::Path;

/// Writes `content` as package-lock.json in `project`.
pub fn write_lockfile(project: &Path, content: &str) {
    fs::write(project.join("package-lock.json"), content).unwrap();
}

/// Writes a package.json at `project/node_modules/<relative>`.
pub fn write_installed_package(project: &Path, relative: &str, manifest: &str) {
    let dir = project.join("node_modules").join(relative);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.json"), manifest).unwrap();
}
