//! Subprocess session for the `ss` command-line client

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::{Error, Result};

/// Exit code the `ss` client uses to report command failure.
pub const ERR_VSS: i32 = 100;

/// Database location and credentials for `ss` invocations.
///
/// Every call spawns a fresh `ss` process with `SSDIR`, `SSUSER` and
/// `SSPWD` set. The working directory is chosen per call: `ss` resolves
/// on-disk files relative to it (the working-folder model).
#[derive(Debug, Clone)]
pub struct VssSession {
    database: PathBuf,
    user: String,
    password: String,
    program: PathBuf,
}

impl VssSession {
    /// Session against the database directory containing `srcsafe.ini`.
    pub fn new(
        database: impl Into<PathBuf>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            user: user.into(),
            password: password.into(),
            program: PathBuf::from("ss"),
        }
    }

    /// Override the `ss` executable (tests, installs outside `PATH`).
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Run `ss` with `args` in `cwd`, requiring a zero exit status.
    ///
    /// A non-zero exit becomes [`Error::CommandFailed`] carrying the
    /// captured output — tool failures are surfaced, never swallowed.
    pub fn run(&self, cwd: &Path, args: &[&str]) -> Result<Output> {
        let program = self.program.display().to_string();
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .env("SSDIR", &self.database)
            .env("SSUSER", &self.user)
            .env("SSPWD", &self.password)
            .output()
            .map_err(|e| Error::Spawn {
                program: program.clone(),
                source: e,
            })?;

        if output.status.success() {
            tracing::debug!(?args, "ss command succeeded");
            return Ok(output);
        }

        let code = output.status.code().unwrap_or(-1);
        let mut text = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if text.is_empty() {
            text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
        Err(Error::CommandFailed {
            program,
            args: args.join(" "),
            code,
            output: text,
        })
    }
}
