//! gpc - scaffold Go projects, or throwaway ones that vanish on request.
//!
//! This library provides the pieces behind the `gpc` binary:
//! - Process execution with normalized exit codes (`shell`)
//! - Workspace creation, the interactive shell and the confirm-before-delete
//!   loop for temporary projects (`workspace`)
//! - Host configuration from the environment (`config`) and project
//!   placement (`project`)
//!
//! # Example
//!
//! ```no_run
//! use gpc::config::Config;
//! use gpc::shell::{SystemCommandRunner, TerminalShell};
//! use gpc::workspace::{EstablishRequest, TerminalOperator, WorkspaceLifecycle};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let request = EstablishRequest {
//!         path: config.projects_root().join("scratch"),
//!         ephemeral: true,
//!         open_editor: false,
//!         open_new_terminal: false,
//!     };
//!
//!     let mut lifecycle = WorkspaceLifecycle::new(
//!         &config,
//!         SystemCommandRunner,
//!         TerminalShell,
//!         TerminalOperator::stdio(),
//!     );
//!     let disposition = lifecycle.establish(&request).await?;
//!     println!("{:?}", disposition);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod project;
pub mod shell;
pub mod utils;
pub mod workspace;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use shell::{CommandRunner, ExecutionError, ExecutionOutcome, InteractiveShellRunner};
pub use workspace::{Disposition, EstablishRequest, LifecycleError, WorkspaceLifecycle};
