//! Process execution for workspace steps.
//!
//! This module spawns the external programs a workspace needs: captured
//! one-shot commands (`git init`, editor and terminal launchers) and
//! interactive shells attached to the operator's terminal. Both normalize
//! their exit status the same way.

mod error;
mod interactive;
mod runner;
pub mod status;

pub use error::ExecutionError;
pub use interactive::{InteractiveShellRunner, TerminalShell};
pub use runner::{CommandRunner, ExecutionOutcome, SystemCommandRunner, command_line};
pub use status::ProcessResult;
