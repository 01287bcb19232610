use crate::shared::error::ExitCode;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// Check that every optional dependency under node_modules is recorded in package-lock.json
#[derive(Parser, Debug)]
#[command(name = "optdeps-audit")]
#[command(version)]
#[command(
    about = "Detect optional dependencies declared in node_modules but missing from package-lock.json",
    long_about = "Scans node_modules for packages declaring optionalDependencies (typically \
                  platform-specific native binaries) and reports every one that is absent from \
                  package-lock.json.\n\nExit status is 0 when all optional dependencies are \
                  locked and 1 otherwise."
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Print progress information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the command line.
    ///
    /// A help flag anywhere before `--` takes precedence over every other
    /// argument, including ones clap would reject.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if help_requested(&args) {
            let bin = args
                .first()
                .cloned()
                .unwrap_or_else(|| OsString::from("optdeps-audit"));
            return Self::try_parse_from([bin, OsString::from("--help")]);
        }

        Self::try_parse_from(args)
    }

    pub fn project_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn help_requested(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .filter_map(|arg| arg.to_str())
        .take_while(|arg| *arg != "--")
        .any(|arg| HELP_FLAGS.contains(&arg))
}

/// Exit code for a clap outcome: 0 for help/version, 1 for usage errors.
pub fn exit_code_for(error: &clap::Error) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::Success,
        _ => ExitCode::InvalidArguments,
    }
}
