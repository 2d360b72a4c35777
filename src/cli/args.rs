//! Command-line argument parsing for toolsmith
//!
//! Provides clap-based CLI with subcommands for listing, generating,
//! and validating tool projects.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolsmith - scaffold and quality-check AI tool projects
#[derive(Parser, Debug)]
#[command(name = "toolsmith")]
#[command(version)]
#[command(about = "Scaffold and quality-check AI-powered frontend tool projects", long_about = None)]
pub struct Args {
    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available tool templates
    List,

    /// Generate one tool project
    Create {
        /// Tool id to generate (see `toolsmith list`)
        #[arg(value_name = "TOOL")]
        tool: String,

        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate every tool project and validate each one
    CreateAll {
        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generate only, without running the quality checks
        #[arg(long)]
        skip_checks: bool,
    },

    /// Validate a project directory against the quality checklist
    Check {
        /// Project directory to validate
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let args = Args::try_parse_from(["toolsmith", "list"]).expect("parse");
        assert!(matches!(args.command, Commands::List));
    }

    #[test]
    fn test_parse_create_with_output() {
        let args = Args::try_parse_from(["toolsmith", "create", "resume-optimizer", "-o", "/tmp/out"])
            .expect("parse");
        match args.command {
            Commands::Create { tool, output } => {
                assert_eq!(tool, "resume-optimizer");
                assert_eq!(output, Some(PathBuf::from("/tmp/out")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_create_all_defaults() {
        let args = Args::try_parse_from(["toolsmith", "create-all"]).expect("parse");
        match args.command {
            Commands::CreateAll { output, skip_checks } => {
                assert!(output.is_none());
                assert!(!skip_checks);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_json_flag() {
        let args = Args::try_parse_from(["toolsmith", "check", "./proj", "--json"]).expect("parse");
        match args.command {
            Commands::Check { path, json } => {
                assert_eq!(path, PathBuf::from("./proj"));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["toolsmith"]).is_err());
    }

    #[test]
    fn test_create_requires_tool_id() {
        assert!(Args::try_parse_from(["toolsmith", "create"]).is_err());
    }
}
