//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for ou-export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// ou-export - Organizational unit user export
#[derive(Parser, Debug)]
#[command(name = "ou-export")]
#[command(version, about, long_about = None)]
#[command(author = "ou-export Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ou-export.toml", env = "OUEXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "OUEXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the user accounts of an organizational unit to CSV
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from([
            "ou-export",
            "export",
            "--domain",
            "corp.local",
            "--organization-unit",
            "Managers",
        ]);
        assert_eq!(cli.config, "ou-export.toml");
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.domain, "corp.local");
                assert_eq!(args.organization_unit, "Managers");
                assert_eq!(args.log_verbosity, "Normal");
                assert!(!args.only_active_users);
                assert!(!args.search_sub_org_units);
                assert!(!args.dry_run);
                assert!(args.output_root.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_flags() {
        let cli = Cli::parse_from([
            "ou-export",
            "export",
            "--domain",
            "corp.local",
            "--organization-unit",
            "Sales Team",
            "--only-active-users",
            "--search-sub-org-units",
            "--log-verbosity",
            "mail, department",
            "--output-root",
            "/srv/reports",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.organization_unit, "Sales Team");
                assert!(args.only_active_users);
                assert!(args.search_sub_org_units);
                assert_eq!(args.log_verbosity, "mail, department");
                assert_eq!(args.output_root.as_deref(), Some("/srv/reports"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_export_requires_unit() {
        let result = Cli::try_parse_from(["ou-export", "export", "--domain", "corp.local"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["ou-export", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["ou-export", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["ou-export", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["ou-export", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, "ou-export.toml");
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
