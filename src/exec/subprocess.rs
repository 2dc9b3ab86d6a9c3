//! Blocking subprocess execution with inherited standard streams

use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::FALLBACK_EXIT_CODE;

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, or `1` when the process was terminated by a signal
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(FALLBACK_EXIT_CODE),
            duration,
        }
    }
}

/// Run a program to completion, streaming its output directly
///
/// Spawn failures are returned untouched so callers can tell a missing
/// executable from a permission problem.
pub fn run_command<S: AsRef<OsStr>>(program: impl AsRef<OsStr>, args: &[S]) -> io::Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}

/// Render a program and its arguments as a single printable line
pub fn format_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
