//! Error types for process execution.

use std::io;

use thiserror::Error;

/// A spawned command or shell that did not finish successfully.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The process could not be started at all (binary missing, bad cwd, ...).
    #[error("failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// A captured command ran and ended with a non-zero exit code.
    #[error("`{command}` failed with exit code {exit_code} (output: {output})")]
    Failed {
        command: String,
        exit_code: i32,
        output: String,
    },

    /// An interactive shell ended with a non-zero exit code.
    #[error("shell `{shell}` exited with code {exit_code}")]
    ShellFailed { shell: String, exit_code: i32 },
}

impl ExecutionError {
    /// The command line that failed.
    pub fn command(&self) -> &str {
        match self {
            Self::Spawn { command, .. } | Self::Failed { command, .. } => command,
            Self::ShellFailed { shell, .. } => shell,
        }
    }

    /// The normalized exit code, if the process ran long enough to produce one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Spawn { .. } => None,
            Self::Failed { exit_code, .. } | Self::ShellFailed { exit_code, .. } => {
                Some(*exit_code)
            }
        }
    }

    /// Captured output, for commands whose streams were intercepted.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Failed { output, .. } => Some(output),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_carries_output() {
        let err = ExecutionError::Failed {
            command: "git init".to_string(),
            exit_code: 128,
            output: "fatal: cannot mkdir".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("git init"));
        assert!(message.contains("128"));
        assert!(message.contains("fatal: cannot mkdir"));
        assert_eq!(err.exit_code(), Some(128));
        assert_eq!(err.output(), Some("fatal: cannot mkdir"));
    }

    #[test]
    fn test_shell_failure_has_no_output() {
        let err = ExecutionError::ShellFailed {
            shell: "bash".to_string(),
            exit_code: 1,
        };

        assert_eq!(err.command(), "bash");
        assert_eq!(err.output(), None);
    }

    #[test]
    fn test_spawn_failure_has_no_exit_code() {
        let err = ExecutionError::Spawn {
            command: "nope".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert_eq!(err.exit_code(), None);
        assert_eq!(err.to_string(), "failed to start `nope`");
        assert!(std::error::Error::source(&err).is_some());
    }
}
