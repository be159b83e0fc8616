//! Command line surface.

use clap::{ArgAction, Parser};
use clap::builder::BoolishValueParser;

#[derive(Debug, Parser, PartialEq, Eq)]
#[command(
    name = "gpc",
    version,
    about = "Create a Go project under $GOPATH/src/github.com/$GPC_GITHUB_USER_ID"
)]
pub struct Cli {
    /// Project directory name (no path separators)
    pub project_name: String,

    /// If you want a project for once, use this. When the shell exits and
    /// you confirm, all files are removed.
    #[arg(long)]
    pub tmp: bool,

    /// Open the project in the editor (using `open -a`)
    #[arg(
        long,
        action = ArgAction::Set,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub open_editor: bool,

    /// Open the shell in a new window (using `open -a`). Always off with --tmp.
    #[arg(
        long,
        action = ArgAction::Set,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub new_terminal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gpc", "hello"]).unwrap();
        assert_eq!(
            cli,
            Cli {
                project_name: "hello".to_string(),
                tmp: false,
                open_editor: true,
                new_terminal: true,
            }
        );
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "gpc",
            "--tmp",
            "--open-editor=false",
            "--new-terminal=no",
            "scratch",
        ])
        .unwrap();

        assert!(cli.tmp);
        assert!(!cli.open_editor);
        assert!(!cli.new_terminal);
        assert_eq!(cli.project_name, "scratch");
    }

    #[test]
    fn test_bare_bool_flag_means_true() {
        let cli = Cli::try_parse_from(["gpc", "--open-editor", "hello"]).unwrap();
        assert!(cli.open_editor);
        assert_eq!(cli.project_name, "hello");
    }

    #[test]
    fn test_exactly_one_project_name() {
        assert!(Cli::try_parse_from(["gpc"]).is_err());
        assert!(Cli::try_parse_from(["gpc", "a", "b"]).is_err());
    }
}
