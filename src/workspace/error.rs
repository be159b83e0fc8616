//! Errors raised while establishing a workspace.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::shell::ExecutionError;

/// The lifecycle step that ran an external program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    VersionControlInit,
    EditorLaunch,
    TerminalLaunch,
    Shell,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::VersionControlInit => "git initialization",
            Step::EditorLaunch => "opening editor",
            Step::TerminalLaunch => "opening a new terminal",
            Step::Shell => "interactive shell",
        };
        f.write_str(name)
    }
}

/// Coarse classification used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Filesystem,
    Execution,
    Aborted,
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("You have already created {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Failed to {action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{step} failed")]
    Execution {
        step: Step,
        #[source]
        source: ExecutionError,
    },

    #[error("Reading the confirmation failed")]
    Prompt(#[source] io::Error),

    #[error("Confirmation input closed; {} was kept", .0.display())]
    PromptClosed(PathBuf),
}

impl LifecycleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LifecycleError::AlreadyExists(_) => ErrorKind::Validation,
            LifecycleError::Filesystem { .. } => ErrorKind::Filesystem,
            LifecycleError::Execution { .. } => ErrorKind::Execution,
            LifecycleError::Prompt(_) | LifecycleError::PromptClosed(_) => ErrorKind::Aborted,
        }
    }
}
