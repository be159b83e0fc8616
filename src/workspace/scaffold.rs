//! Creation of the workspace directory and its template file.

use std::io;
use std::path::Path;

use tokio::fs::{self, DirBuilder};
use tracing::debug;

use super::{LifecycleError, Workspace};
use crate::project::{TEMPLATE_FILE_NAME, TEMPLATE_SOURCE};

/// Permission bits for created directories (before umask).
pub const DIR_MODE: u32 = 0o774;

/// Create a fresh directory at `path` and write the template into it.
///
/// An existing `path` is never touched.
pub async fn create(path: &Path, ephemeral: bool) -> Result<Workspace, LifecycleError> {
    match fs::symlink_metadata(path).await {
        Ok(_) => return Err(LifecycleError::AlreadyExists(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(filesystem("inspect", path, source)),
    }

    if let Some(parent) = path.parent() {
        dir_builder(true)
            .create(parent)
            .await
            .map_err(|source| filesystem("create", parent, source))?;
    }

    // Non-recursive so a directory appearing since the check is still refused
    dir_builder(false).create(path).await.map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            LifecycleError::AlreadyExists(path.to_path_buf())
        } else {
            filesystem("create", path, source)
        }
    })?;
    debug!("Created directory {}", path.display());

    let template = path.join(TEMPLATE_FILE_NAME);
    fs::write(&template, TEMPLATE_SOURCE)
        .await
        .map_err(|source| filesystem("write", &template, source))?;

    Ok(Workspace::new(path.to_path_buf(), ephemeral))
}

fn dir_builder(recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder
}

fn filesystem(action: &'static str, path: &Path, source: io::Error) -> LifecycleError {
    LifecycleError::Filesystem {
        action,
        path: path.to_path_buf(),
        source,
    }
}
