//! Host configuration resolved once at startup.
//!
//! # Environment
//!
//! - `GPC_EDITOR_PATH` - application used to open new projects
//! - `GPC_TERMINAL_PATH` - application used for `--new-terminal`
//! - `GPC_SHELL_PATH` - shell started in the workspace
//! - `GPC_GITHUB_USER_ID` - required, names the project root
//! - `GOPATH` - projects live under `$GOPATH/src/github.com/<user>`
//!   (falls back to `$HOME/go`)
//!
//! Empty values are treated as unset.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_EDITOR_PATH: &str = "/Applications/Visual Studio Code.app";
pub const DEFAULT_TERMINAL_PATH: &str = "/Applications/Utilities/Terminal.app";
pub const DEFAULT_SHELL_PATH: &str = "bash";

/// Program used to hand a directory to a desktop application.
pub const LAUNCHER: &str = "open";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("You must set \"{0}\" to your GitHub id")]
    MissingVar(&'static str),

    #[error("Cannot locate the Go workspace: neither GOPATH nor HOME is set")]
    NoGoPath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub editor_path: String,
    pub terminal_path: String,
    pub shell_path: String,
    pub github_user: String,
    pub go_path: PathBuf,
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let github_user = var("GPC_GITHUB_USER_ID").ok_or(ConfigError::MissingVar("GPC_GITHUB_USER_ID"))?;

        let go_path = match var("GOPATH") {
            Some(path) => PathBuf::from(path),
            None => var("HOME")
                .map(|home| PathBuf::from(home).join("go"))
                .ok_or(ConfigError::NoGoPath)?,
        };

        Ok(Self {
            editor_path: var("GPC_EDITOR_PATH").unwrap_or_else(|| DEFAULT_EDITOR_PATH.to_string()),
            terminal_path: var("GPC_TERMINAL_PATH")
                .unwrap_or_else(|| DEFAULT_TERMINAL_PATH.to_string()),
            shell_path: var("GPC_SHELL_PATH").unwrap_or_else(|| DEFAULT_SHELL_PATH.to_string()),
            github_user,
            go_path,
        })
    }

    /// Directory that holds every project of the configured user.
    pub fn projects_root(&self) -> PathBuf {
        self.go_path.join("src").join("github.com").join(&self.github_user)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("GPC_GITHUB_USER_ID", "octocat"),
            ("GOPATH", "/work/go"),
        ]))
        .unwrap();

        assert_eq!(config.editor_path, DEFAULT_EDITOR_PATH);
        assert_eq!(config.terminal_path, DEFAULT_TERMINAL_PATH);
        assert_eq!(config.shell_path, DEFAULT_SHELL_PATH);
        assert_eq!(config.projects_root(), PathBuf::from("/work/go/src/github.com/octocat"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GPC_GITHUB_USER_ID", "octocat"),
            ("GOPATH", "/work/go"),
            ("GPC_EDITOR_PATH", "/opt/editor"),
            ("GPC_TERMINAL_PATH", "/opt/term"),
            ("GPC_SHELL_PATH", "zsh"),
        ]))
        .unwrap();

        assert_eq!(config.editor_path, "/opt/editor");
        assert_eq!(config.terminal_path, "/opt/term");
        assert_eq!(config.shell_path, "zsh");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("GPC_GITHUB_USER_ID", "octocat"),
            ("GOPATH", "/work/go"),
            ("GPC_SHELL_PATH", ""),
        ]))
        .unwrap();

        assert_eq!(config.shell_path, DEFAULT_SHELL_PATH);
    }

    #[test]
    fn test_gopath_falls_back_to_home() {
        let config = Config::from_lookup(lookup(&[
            ("GPC_GITHUB_USER_ID", "octocat"),
            ("HOME", "/home/me"),
        ]))
        .unwrap();

        assert_eq!(config.go_path, PathBuf::from("/home/me/go"));
    }

    #[test]
    fn test_missing_user_id() {
        let err = Config::from_lookup(lookup(&[("GOPATH", "/work/go")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("GPC_GITHUB_USER_ID"));

        let err = Config::from_lookup(lookup(&[
            ("GPC_GITHUB_USER_ID", ""),
            ("GOPATH", "/work/go"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("GPC_GITHUB_USER_ID"));
    }

    #[test]
    fn test_no_gopath_and_no_home() {
        let err = Config::from_lookup(lookup(&[("GPC_GITHUB_USER_ID", "octocat")])).unwrap_err();
        assert_eq!(err, ConfigError::NoGoPath);
    }
}
