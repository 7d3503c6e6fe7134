//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the ou-export configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::load_config;
use crate::config::schema::{DirectoryTarget, OuExportConfig};
use crate::core::export::ExportSettings;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates, so a loaded configuration is a valid one.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        for line in Self::summary_lines(&config) {
            println!("{line}");
        }
        println!();

        Ok(EXIT_SUCCESS)
    }

    /// Human-readable summary; never includes the bind password
    fn summary_lines(config: &OuExportConfig) -> Vec<String> {
        let mut lines = vec![
            "Configuration Summary:".to_string(),
            format!("  Log Level: {}", config.application.log_level),
        ];

        match config.directory.target {
            DirectoryTarget::Ldap => {
                lines.push("  Directory Target: LDAP".to_string());
                if let Some(ref ldap) = config.directory.ldap {
                    lines.push(format!("  LDAP URL: {}", ldap.url));
                    lines.push(format!(
                        "  Bind DN: {}",
                        ldap.bind_dn.as_deref().unwrap_or("(anonymous)")
                    ));
                    lines.push(format!("  StartTLS: {}", ldap.starttls));
                    lines.push(format!("  Page Size: {}", ldap.page_size));
                }
            }
            DirectoryTarget::Snapshot => {
                lines.push("  Directory Target: Snapshot".to_string());
                if let Some(ref snapshot) = config.directory.snapshot {
                    lines.push(format!("  Snapshot Path: {}", snapshot.path));
                }
            }
        }

        let settings = ExportSettings::from_config(&config.export);
        lines.push(format!("  Output Root: {}", settings.output_root.display()));
        lines.push(format!(
            "  Activity Window: {} days",
            settings.activity.cutoff_days()
        ));
        lines.push(format!("  Dry Run: {}", settings.dry_run));
        lines.push(format!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        ));
        lines
    }
}
