//! Workspace lifecycle orchestration.
//!
//! A workspace is created once, initialized as a git repository, optionally
//! opened in the editor, and then either handed to the operator (persistent)
//! or explored in a shell until the operator confirms its deletion
//! (ephemeral).
//!
//! Every step runs to completion before the next one starts. Failures are
//! fatal and nothing already done is rolled back, except inside the
//! confirm-loop where a failed shell simply reopens.

mod error;
mod operator;
mod scaffold;

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::{Config, LAUNCHER};
use crate::shell::{CommandRunner, ExecutionOutcome, InteractiveShellRunner};

pub use error::{ErrorKind, LifecycleError, Step};
pub use operator::{CONFIRM_PROMPT, Operator, TerminalOperator, is_affirmative};
pub use scaffold::DIR_MODE;

/// A project directory owned by this process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    path: PathBuf,
    ephemeral: bool,
}

impl Workspace {
    fn new(path: PathBuf, ephemeral: bool) -> Self {
        Self { path, ephemeral }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}

/// What to establish and how to open it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstablishRequest {
    pub path: PathBuf,
    pub ephemeral: bool,
    pub open_editor: bool,
    /// Ignored for ephemeral workspaces.
    pub open_new_terminal: bool,
}

/// How an established workspace ended up.
#[derive(Debug)]
pub enum Disposition {
    /// The operator left the shell; the directory stays on disk.
    Persisted,
    /// A new terminal window was opened on the directory.
    HandedOff,
    /// Deletion was confirmed and the directory tree removed.
    Destroyed,
    /// Deletion was confirmed but removing the tree failed.
    CleanupFailed(io::Error),
}

/// Drives a workspace from creation to its final [`Disposition`].
pub struct WorkspaceLifecycle<'a, C, S, O> {
    config: &'a Config,
    commands: C,
    shell: S,
    operator: O,
}

impl<'a, C, S, O> WorkspaceLifecycle<'a, C, S, O>
where
    C: CommandRunner,
    S: InteractiveShellRunner,
    O: Operator,
{
    pub fn new(config: &'a Config, commands: C, shell: S, operator: O) -> Self {
        Self {
            config,
            commands,
            shell,
            operator,
        }
    }

    /// Create the workspace described by `request` and run it to completion.
    pub async fn establish(&mut self, request: &EstablishRequest) -> Result<Disposition, LifecycleError> {
        let config = self.config;

        let workspace = scaffold::create(&request.path, request.ephemeral).await?;
        info!("Created project at {}", workspace.path().display());

        self.run_step(Step::VersionControlInit, workspace.path(), "git", &["init"])
            .await?;

        if request.open_editor {
            self.run_step(
                Step::EditorLaunch,
                workspace.path(),
                LAUNCHER,
                &[".", "-a", config.editor_path.as_str()],
            )
            .await?;
        }

        if workspace.is_ephemeral() {
            if request.open_new_terminal {
                debug!("New terminal is never opened for a temporary project");
            }
            self.confirm_loop(&workspace).await?;
            return Ok(destroy(&workspace).await);
        }

        if request.open_new_terminal {
            self.run_step(
                Step::TerminalLaunch,
                workspace.path(),
                LAUNCHER,
                &[".", "-a", config.terminal_path.as_str()],
            )
            .await?;
            return Ok(Disposition::HandedOff);
        }

        self.shell
            .run_interactive(workspace.path(), &config.shell_path)
            .await
            .map_err(|source| LifecycleError::Execution {
                step: Step::Shell,
                source,
            })?;
        Ok(Disposition::Persisted)
    }

    async fn run_step(
        &mut self,
        step: Step,
        dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<ExecutionOutcome, LifecycleError> {
        debug!("Step: {}", step);
        let outcome = self
            .commands
            .run(dir, program, args)
            .await
            .map_err(|source| LifecycleError::Execution { step, source })?;

        if !outcome.combined_output().is_empty() {
            debug!("{} output: {}", step, outcome.output_text());
        }
        Ok(outcome)
    }

    /// Reopen the shell until the operator explicitly confirms deletion.
    async fn confirm_loop(&mut self, workspace: &Workspace) -> Result<(), LifecycleError> {
        let shell = self.config.shell_path.as_str();
        let mut sessions = 0usize;

        loop {
            sessions += 1;
            if let Err(e) = self.shell.run_interactive(workspace.path(), shell).await {
                warn!(
                    shell = e.command(),
                    exit_code = ?e.exit_code(),
                    "Shell session {} ended with an error: {}",
                    sessions,
                    e
                );
            }

            match self.operator.ask(CONFIRM_PROMPT).await {
                Ok(Some(token)) if is_affirmative(&token) => break,
                Ok(Some(token)) => debug!("Deletion not confirmed ({:?}), reopening shell", token),
                Ok(None) => return Err(LifecycleError::PromptClosed(workspace.path().to_path_buf())),
                Err(e) => return Err(LifecycleError::Prompt(e)),
            }
        }

        info!("Deletion confirmed after {} shell session(s)", sessions);
        Ok(())
    }
}

/// Remove the workspace tree once. Failures are reported, not retried.
async fn destroy(workspace: &Workspace) -> Disposition {
    match tokio::fs::remove_dir_all(workspace.path()).await {
        Ok(()) => {
            info!("Removed {}", workspace.path().display());
            Disposition::Destroyed
        }
        Err(e) => {
            error!("Failed removing {}: {}", workspace.path().display(), e);
            Disposition::CleanupFailed(e)
        }
    }
}
