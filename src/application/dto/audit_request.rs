use crate::adapters::outbound::filesystem::INSTALL_ROOT_NAME;
use std::path::PathBuf;

/// AuditRequest - request DTO for the optional dependency audit
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Project directory containing package-lock.json and node_modules
    pub project_path: PathBuf,
}

impl AuditRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }

    pub fn install_root(&self) -> PathBuf {
        self.project_path.join(INSTALL_ROOT_NAME)
    }
}
