//! Project naming and on-disk placement.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Name of the source file written into every new project.
pub const TEMPLATE_FILE_NAME: &str = "main.go";

/// Contents of [`TEMPLATE_FILE_NAME`].
pub const TEMPLATE_SOURCE: &str = "package main\n\nfunc main() {\n    \n}\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Invalid project name: {0:?}")]
    InvalidName(String),
}

/// Check that `name` names a single directory directly under the projects root.
pub fn validate_name(name: &str) -> Result<(), ProjectError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR);

    if invalid {
        return Err(ProjectError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Resolve the directory for project `name` under `root`.
///
/// The result is always a direct child of `root`.
pub fn project_dir(root: &Path, name: &str) -> Result<PathBuf, ProjectError> {
    validate_name(name)?;

    let dir = root.join(name);
    match dir.strip_prefix(root).map(|rest| rest.components().collect::<Vec<_>>()) {
        Ok(parts) if matches!(parts.as_slice(), [Component::Normal(_)]) => Ok(dir),
        _ => Err(ProjectError::InvalidName(name.to_string())),
    }
}
