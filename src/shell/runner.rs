//! One-shot command execution with captured output.
//!
//! Used for the non-interactive steps of a workspace lifecycle: `git init`,
//! launching the editor and opening a new terminal window.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::ExecutionError;
use super::status::ProcessResult;

/// Result of a command that ran to completion.
///
/// The combined output is all of stdout followed by all of stderr; writes
/// from the two streams are not interleaved in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    exit_code: i32,
    combined_output: Vec<u8>,
}

impl ExecutionOutcome {
    pub fn new(exit_code: i32, combined_output: Vec<u8>) -> Self {
        Self {
            exit_code,
            combined_output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Stdout followed by stderr, as raw bytes.
    pub fn combined_output(&self) -> &[u8] {
        &self.combined_output
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Lossy UTF-8 view of the output, trimmed for log and error messages.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.combined_output).trim().to_string()
    }
}

/// Runs a single command to completion in a working directory.
#[allow(async_fn_in_trait, reason = "only used as a generic bound")]
pub trait CommandRunner {
    /// Run `program` with `args` in `dir`.
    ///
    /// Returns the outcome when the command exits with code `0`, and an
    /// [`ExecutionError`] carrying the captured output otherwise.
    async fn run(
        &mut self,
        dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<ExecutionOutcome, ExecutionError>;
}

/// [`CommandRunner`] backed by real host processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    async fn run(
        &mut self,
        dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<ExecutionOutcome, ExecutionError> {
        let command = command_line(program, args);
        debug!("Running `{}` in {}", command, dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ExecutionError::Spawn {
                command: command.clone(),
                source,
            })?;

        let outcome = ExecutionOutcome::new(
            output.status.exit_code(),
            merge_output(&output.stdout, &output.stderr),
        );

        if !outcome.succeeded() {
            return Err(ExecutionError::Failed {
                command,
                exit_code: outcome.exit_code(),
                output: outcome.output_text(),
            });
        }

        debug!("`{}` finished", command);
        Ok(outcome)
    }
}

/// Render a program and its arguments as a single display string.
pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

// stderr is appended after stdout, separated by a newline when needed
fn merge_output(stdout: &[u8], stderr: &[u8]) -> Vec<u8> {
    let mut merged = Vec::with_capacity(stdout.len() + stderr.len() + 1);
    merged.extend_from_slice(stdout);
    if !stderr.is_empty() {
        if !merged.is_empty() && merged.last() != Some(&b'\n') {
            merged.push(b'\n');
        }
        merged.extend_from_slice(stderr);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success_tracks_exit_code() {
        assert!(ExecutionOutcome::new(0, Vec::new()).succeeded());
        assert!(!ExecutionOutcome::new(1, Vec::new()).succeeded());
        assert!(!ExecutionOutcome::new(-1, Vec::new()).succeeded());
    }

    #[test]
    fn test_merge_output() {
        assert_eq!(merge_output(b"out\n", b"err\n"), b"out\nerr\n");
        assert_eq!(merge_output(b"out", b"err"), b"out\nerr");
        assert_eq!(merge_output(b"", b"err"), b"err");
        assert_eq!(merge_output(b"out", b""), b"out");
    }

    #[test]
    fn test_command_line() {
        assert_eq!(command_line("git", &["init"]), "git init");
        assert_eq!(command_line("open", &[".", "-a", "Editor"]), "open . -a Editor");
        assert_eq!(command_line("true", &[]), "true");
    }

    #[tokio::test]
    async fn test_run_success_captures_output() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = SystemCommandRunner
            .run(dir.path(), "sh", &["-c", "echo hello"])
            .await
            .unwrap();

        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(outcome.output_text(), "hello");
    }

    #[tokio::test]
    async fn test_run_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();

        let outcome = SystemCommandRunner
            .run(dir.path(), "ls", &[])
            .await
            .unwrap();

        assert!(outcome.output_text().contains("marker.txt"));
    }

    #[tokio::test]
    async fn test_run_failure_carries_combined_output() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemCommandRunner
            .run(dir.path(), "sh", &["-c", "echo out; echo fatal: broken >&2; exit 3"])
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), Some(3));
        let output = err.output().unwrap();
        assert!(output.contains("out"));
        assert!(output.contains("fatal: broken"));
    }

    #[tokio::test]
    async fn test_run_missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemCommandRunner
            .run(dir.path(), "gpc-definitely-not-a-real-binary", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, ExecutionError::Spawn { .. }));
    }
}
