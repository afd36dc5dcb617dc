//! Blocking subprocess execution with captured output.
//!
//! Every toolkit invocation is a synchronous subprocess call: spawn, wait,
//! capture stdout and stderr as bytes, decode as text. There are no
//! timeouts and no cancellation.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use log::{debug, info};

use crate::error::Result;

/// Captured outcome of one task invocation.
///
/// Non-empty stderr sets `error`; a non-zero exit status alone does not.
/// This mirrors the toolkit's own convention, where diagnostics may
/// legitimately go to stdout. The exit code is still recorded for callers
/// that care.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: Option<String>,
    pub error: bool,
    pub status_code: Option<i32>,
}

impl ExecutionResult {
    fn from_output(output: &Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let (stderr, error) = if stderr.is_empty() {
            (None, false)
        } else {
            (Some(stderr.into_owned()), true)
        };

        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
            error,
            status_code: output.status.code(),
        }
    }
}

/// What a generic command invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The process succeeded; its decoded standard output.
    Stdout(String),
    /// The process failed; the exit code (None if killed by a signal) plus
    /// whatever it wrote to stderr.
    Failed {
        code: Option<i32>,
        stderr: Option<String>,
    },
}

/// Runs a task binary with its built `name=value` argument list.
///
/// The task name is resolved through the process search path, the way the
/// toolkit installs its tasks.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or waited on. A
/// subprocess that runs but fails is reported through the result, not as
/// an error.
pub fn run_task(name: &str, args: &[String]) -> Result<ExecutionResult> {
    info!("Running task `{name}`");
    debug!("Arguments: {args:?}");

    let output = Command::new(name).args(args).output()?;
    Ok(ExecutionResult::from_output(&output))
}

/// Runs an arbitrary external command, capturing its output.
///
/// Returns the decoded stdout on success, or the exit code and captured
/// stderr when the process failed.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or waited on.
pub fn run_generic<I, S>(program: &Path, args: I) -> Result<CommandOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!("Running generic command `{}`", program.display());

    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        return Ok(CommandOutcome::Stdout(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = (!stderr.is_empty()).then(|| stderr.into_owned());

    Ok(CommandOutcome::Failed {
        code: output.status.code(),
        stderr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_task_captures_stdout() {
        // `echo` resolves via the search path just like a toolkit task.
        let result = run_task("echo", &["vis=data.uv".to_string()]).unwrap();
        assert_eq!(result.stdout, "vis=data.uv\n");
        assert!(!result.error);
        assert!(result.stderr.is_none());
        assert_eq!(result.status_code, Some(0));
    }

    #[test]
    fn test_run_task_nonempty_stderr_sets_error() {
        // `sh` with a `name=value` style argument tries to open a script
        // named `c=...` and complains on stderr.
        let result = run_task("sh", &["c=does-not-exist".to_string()]).unwrap();
        assert!(result.error);
        assert!(result.stderr.is_some());
    }

    #[test]
    fn test_run_task_spawn_failure_is_an_error() {
        let result = run_task("mirtask-no-such-binary", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_generic_success_returns_stdout() {
        let outcome = run_generic(Path::new("echo"), ["hello"]).unwrap();
        assert_eq!(outcome, CommandOutcome::Stdout("hello\n".to_string()));
    }

    #[test]
    fn test_run_generic_failure_returns_exit_code() {
        let outcome = run_generic(Path::new("sh"), ["-c", "exit 3"]).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Failed {
                code: Some(3),
                stderr: None,
            }
        );
    }

    #[test]
    fn test_run_generic_failure_captures_stderr() {
        let outcome = run_generic(Path::new("sh"), ["-c", "echo bad >&2; exit 1"]).unwrap();
        match outcome {
            CommandOutcome::Failed { code, stderr } => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr.as_deref(), Some("bad\n"));
            }
            CommandOutcome::Stdout(_) => panic!("expected failure outcome"),
        }
    }
}
