mod adapters;
mod application;
mod audit;
mod cli;
mod ports;
mod shared;

use adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use adapters::outbound::filesystem::{
    FileSystemReader, NodeModulesScanner, INSTALL_ROOT_NAME, LOCKFILE_NAME,
};
use application::dto::AuditRequest;
use application::use_cases::AuditOptionalDependenciesUseCase;
use cli::Args;
use owo_colors::{OwoColorize, Stream};
use ports::outbound::{OutputPresenter, ProgressReporter};
use shared::error::{AuditError, ExitCode};
use shared::security::validate_not_symlink;
use shared::Result;
use std::env;
use std::path::Path;
use std::process;

const SUCCESS_MESSAGE: &str = "✅ All optional dependencies are present in package-lock.json";

const FATAL_PREFIX: &str = "❌ An error occurred:";

fn main() {
    let args = match Args::try_parse_args(env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // Help and version go to stdout, usage errors to stderr
            let _ = e.print();
            process::exit(cli::exit_code_for(&e).as_i32());
        }
    };

    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            let diagnostic = render_fatal(&e);
            let (headline, details) = diagnostic
                .split_once('\n')
                .unwrap_or((diagnostic.as_str(), ""));
            eprintln!(
                "{}",
                headline.if_supports_color(Stream::Stderr, |text| text.red())
            );
            if !details.is_empty() {
                eprintln!("{}", details);
            }
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Formats a fatal error: the prefixed first line of the message, then the
/// rest of the message and any cause chain.
fn render_fatal(error: &anyhow::Error) -> String {
    let message = error.to_string();
    let (headline, rest) = message
        .split_once('\n')
        .unwrap_or((message.as_str(), ""));

    let mut rendered = format!("{} {}", FATAL_PREFIX, headline);
    if !rest.trim().is_empty() {
        rendered.push('\n');
        rendered.push_str(rest.trim_start_matches('\n'));
    }

    let mut source = error.source();
    while let Some(err) = source {
        rendered.push_str(&format!("\nCaused by: {}", err));
        source = err.source();
    }

    rendered
}

fn run(args: &Args) -> Result<ExitCode> {
    let project_path = args.project_path();

    validate_project_path(&project_path)?;
    check_preconditions(&project_path)?;

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let use_case = AuditOptionalDependenciesUseCase::new(
        reader,
        NodeModulesScanner::new(reader),
        StderrProgressReporter::new(args.verbose),
    );

    let response = use_case.execute(AuditRequest::new(project_path))?;

    if response.all_satisfied() {
        StdoutPresenter::new().present(SUCCESS_MESSAGE)?;
        return Ok(ExitCode::Success);
    }

    StderrProgressReporter::new(args.verbose).report_failure(&format!(
        "❌ {} optional dependency(ies) missing from package-lock.json",
        response.missing_count()
    ));
    Ok(ExitCode::MissingDependencies)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    validate_not_symlink(path, "project directory").map_err(|e| {
        AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    if !path.is_dir() {
        return Err(AuditError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Both inputs must be present before any file is parsed.
fn check_preconditions(project_path: &Path) -> Result<()> {
    let lockfile_path = project_path.join(LOCKFILE_NAME);
    if !lockfile_path.is_file() {
        return Err(AuditError::LockfileNotFound {
            path: lockfile_path,
            suggestion: "Run this command in the root of an npm project, \
                         or run `npm install` to generate package-lock.json."
                .to_string(),
        }
        .into());
    }

    let install_root = project_path.join(INSTALL_ROOT_NAME);
    if !install_root.is_dir() {
        return Err(AuditError::InstallRootNotFound {
            path: install_root,
            suggestion: "Run `npm install` (or `npm ci`) before auditing optional dependencies."
                .to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }

    #[test]
    fn test_check_preconditions_missing_lockfile() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(INSTALL_ROOT_NAME)).unwrap();

        let err = check_preconditions(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::LockfileNotFound { .. })
        ));
    }

    #[test]
    fn test_check_preconditions_missing_node_modules() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(LOCKFILE_NAME), "{}").unwrap();

        let err = check_preconditions(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::InstallRootNotFound { .. })
        ));
    }

    #[test]
    fn test_check_preconditions_lockfile_checked_first() {
        let temp_dir = TempDir::new().unwrap();
        let err = check_preconditions(temp_dir.path()).unwrap_err();
        assert!(format!("{}", err).contains("package-lock.json file not found"));
    }

    #[test]
    fn test_render_fatal_puts_prefix_and_path_on_first_line() {
        let error: anyhow::Error = AuditError::LockfileNotFound {
            path: PathBuf::from("./package-lock.json"),
            suggestion: "Run npm install".to_string(),
        }
        .into();

        let rendered = render_fatal(&error);
        let first_line = rendered.lines().next().unwrap();

        assert_eq!(
            first_line,
            "❌ An error occurred: package-lock.json file not found: ./package-lock.json"
        );
        assert!(rendered.contains("💡 Hint: Run npm install"));
    }

    #[test]
    fn test_render_fatal_single_line_error() {
        let error = anyhow::anyhow!("Failed to write to stdout: broken pipe");
        assert_eq!(
            render_fatal(&error),
            "❌ An error occurred: Failed to write to stdout: broken pipe"
        );
    }

    #[test]
    fn test_render_fatal_appends_cause_chain() {
        let error = anyhow::Error::new(std::io::Error::other("disk gone")).context("Scan failed");
        let rendered = render_fatal(&error);

        assert!(rendered.starts_with("❌ An error occurred: Scan failed"));
        assert!(rendered.ends_with("Caused by: disk gone"));
    }

    #[test]
    fn test_check_preconditions_satisfied() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(LOCKFILE_NAME), "{}").unwrap();
        fs::create_dir(temp_dir.path().join(INSTALL_ROOT_NAME)).unwrap();
        assert!(check_preconditions(temp_dir.path()).is_ok());
    }
}
