//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::config::LaunchMode;
use clap::Parser;
use std::path::PathBuf;

/// doclaunch - Provision dependencies and run the documentation server.
#[derive(Debug, Parser)]
#[command(name = "doclaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Install root containing the compose file and server script
    #[arg(short, long, env = "DOCLAUNCH_ROOT")]
    pub root: Option<PathBuf>,

    /// How to provision and start the server (overrides the config file)
    #[arg(short, long, value_enum, env = "DOCLAUNCH_MODE")]
    pub mode: Option<LaunchMode>,

    /// Path to config file (overrides default .doclaunch/config.yml)
    #[arg(short, long, env = "DOCLAUNCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Check prerequisites and exit without starting anything
    #[arg(long)]
    pub check: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Arguments passed through to the server
    #[arg(last = true)]
    pub target_args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["doclaunch"]).unwrap();
        assert!(cli.root.is_none());
        assert!(!cli.check);
        assert!(cli.target_args.is_empty());
    }

    #[test]
    fn mode_accepts_both_strategies() {
        let cli = Cli::try_parse_from(["doclaunch", "--mode", "local"]).unwrap();
        assert_eq!(cli.mode, Some(LaunchMode::Local));

        let cli = Cli::try_parse_from(["doclaunch", "-m", "container"]).unwrap();
        assert_eq!(cli.mode, Some(LaunchMode::Container));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["doclaunch", "--mode", "remote"]).is_err());
    }

    #[test]
    fn trailing_args_follow_double_dash() {
        let cli = Cli::try_parse_from([
            "doclaunch",
            "--root",
            "/opt/docs",
            "--",
            "--port",
            "9000",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/opt/docs")));
        assert_eq!(cli.target_args, vec!["--port", "9000"]);
    }

    #[test]
    fn flags_parse() {
        let cli =
            Cli::try_parse_from(["doclaunch", "--check", "--quiet", "--no-color", "--debug"])
                .unwrap();
        assert!(cli.check);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(cli.debug);
    }
}
