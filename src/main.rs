//! Main entry point for gpc.
//!
//! Parses the command line, initializes logging, resolves the project path
//! and runs the workspace lifecycle. Any fatal error is logged and turned
//! into a non-zero exit status.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use gpc::config::Config;
use gpc::shell::{SystemCommandRunner, TerminalShell};
use gpc::workspace::{Disposition, EstablishRequest, LifecycleError, TerminalOperator, WorkspaceLifecycle};
use gpc::{Cli, project, utils};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging before anything else
    let _guards = utils::logger::init_logging();

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start the runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run(cli));
    // A stdin read may still be parked on a blocking thread
    runtime.shutdown_background();

    match result {
        Ok(disposition) => {
            debug!("Finished: {:?}", disposition);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.downcast_ref::<LifecycleError>() {
                Some(lifecycle) => error!(kind = ?lifecycle.kind(), "{:#}", e),
                None => error!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Disposition> {
    let config = Config::from_env()?;

    let dir = project::project_dir(&config.projects_root(), &cli.project_name)?;
    let path = std::path::absolute(&dir)
        .with_context(|| format!("Failed resolving {}", dir.display()))?;

    let request = EstablishRequest {
        path,
        ephemeral: cli.tmp,
        open_editor: cli.open_editor,
        open_new_terminal: cli.new_terminal,
    };

    let mut lifecycle = WorkspaceLifecycle::new(
        &config,
        SystemCommandRunner,
        TerminalShell,
        TerminalOperator::stdio(),
    );
    let disposition = lifecycle.establish(&request).await?;
    Ok(disposition)
}
