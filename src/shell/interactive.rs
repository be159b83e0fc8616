//! Interactive subshell attached to the controlling terminal.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::ExecutionError;
use super::status::ProcessResult;

/// Hands the terminal over to an interactive shell until it exits.
#[allow(async_fn_in_trait, reason = "only used as a generic bound")]
pub trait InteractiveShellRunner {
    /// Run `shell` in `dir` with the invoking process's standard streams.
    ///
    /// Blocks until the operator leaves the shell. A non-zero exit is an
    /// [`ExecutionError::ShellFailed`]; nothing is captured.
    async fn run_interactive(&mut self, dir: &Path, shell: &str) -> Result<(), ExecutionError>;
}

/// [`InteractiveShellRunner`] that spawns a real shell on the current terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalShell;

impl InteractiveShellRunner for TerminalShell {
    async fn run_interactive(&mut self, dir: &Path, shell: &str) -> Result<(), ExecutionError> {
        info!("Starting shell `{}` in {}", shell, dir.display());

        // Environment is inherited as-is
        let mut child = Command::new(shell)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ExecutionError::Spawn {
                command: shell.to_string(),
                source,
            })?;

        // The shell shares our foreground process group, so Ctrl-C reaches it
        // directly. Swallow our copy so the orchestrator outlives the session.
        let mut watch_interrupts = true;
        let waited = loop {
            tokio::select! {
                status = child.wait() => break status,
                signal = tokio::signal::ctrl_c(), if watch_interrupts => match signal {
                    Ok(()) => debug!("Interrupt left to the interactive shell"),
                    Err(e) => {
                        warn!("Cannot listen for interrupts: {}", e);
                        watch_interrupts = false;
                    }
                },
            }
        };

        let status = waited.map_err(|source| ExecutionError::Spawn {
            command: shell.to_string(),
            source,
        })?;

        let exit_code = status.exit_code();
        if exit_code != 0 {
            return Err(ExecutionError::ShellFailed {
                shell: shell.to_string(),
                exit_code,
            });
        }

        debug!("Shell `{}` exited cleanly", shell);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clean_exit() {
        let dir = tempfile::tempdir().unwrap();
        TerminalShell.run_interactive(dir.path(), "true").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_shell_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = TerminalShell
            .run_interactive(dir.path(), "false")
            .await
            .unwrap_err();

        match err {
            ExecutionError::ShellFailed { shell, exit_code } => {
                assert_eq!(shell, "false");
                assert_eq!(exit_code, 1);
            }
            other => panic!("Expected ShellFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_shell_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TerminalShell
            .run_interactive(dir.path(), "gpc-no-such-shell")
            .await
            .unwrap_err();

        assert!(matches!(err, ExecutionError::Spawn { .. }));
    }
}
