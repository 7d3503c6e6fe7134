//! Export command implementation
//!
//! This module implements the `export` command, which writes the user
//! accounts of one organizational unit to a CSV file.

use super::{EXIT_CONFIG_ERROR, EXIT_CONNECTION_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use crate::config::load_config;
use crate::core::attributes::Verbosity;
use crate::core::export::ExportCoordinator;
use crate::domain::{ExportRequest, OuExportError};
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// DNS domain of the directory, e.g. corp.example.com (may be empty)
    #[arg(long)]
    pub domain: String,

    /// Organizational unit directly below the domain root
    #[arg(long)]
    pub organization_unit: String,

    /// Only export enabled accounts that logged on within the activity window
    #[arg(long)]
    pub only_active_users: bool,

    /// Include accounts in nested organizational units
    #[arg(long)]
    pub search_sub_org_units: bool,

    /// Columns: All, Verbose, Normal, Minimal, or a comma-separated attribute list
    #[arg(long, default_value = "Normal", value_name = "VERBOSITY")]
    pub log_verbosity: String,

    /// Override the output root (the `Exports` directory is created below it)
    #[arg(long)]
    pub output_root: Option<String>,

    /// Query the directory and report without writing the CSV
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Builds the export request from the arguments
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown verbosity keyword, a blank
    /// unit or a malformed domain
    pub fn to_request(&self) -> Result<ExportRequest, OuExportError> {
        let verbosity: Verbosity = self.log_verbosity.parse()?;
        ExportRequest::builder()
            .domain(self.domain.as_str())
            .organization_unit(self.organization_unit.as_str())
            .active_only(self.only_active_users)
            .include_nested(self.search_sub_org_units)
            .verbosity(verbosity)
            .build()
    }

    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let request = match self.to_request() {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Invalid export arguments");
                eprintln!("Invalid arguments: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        // Apply CLI overrides
        if let Some(output_root) = &self.output_root {
            tracing::info!(output_root = %output_root, "Overriding output root from CLI");
            config.export.output_root = Some(output_root.clone());
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }

        if config.export.dry_run {
            println!("🔍 DRY RUN MODE - No file will be written");
            println!();
        }

        tracing::info!("Creating export coordinator");
        let coordinator = match ExportCoordinator::from_config(&config).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to open directory");
                eprintln!("Failed to initialize export: {e}");
                return Ok(match e {
                    OuExportError::Configuration(_) => EXIT_CONFIG_ERROR,
                    _ => EXIT_CONNECTION_ERROR,
                });
            }
        };

        println!(
            "🚀 Exporting {} users of '{}'...",
            request.population_tag().to_lowercase(),
            request.organization_unit
        );

        let result = coordinator.execute(&request).await;
        if let Err(e) = coordinator.close().await {
            tracing::warn!(error = %e, "Failed to close directory session");
        }

        let summary = match result {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(if e.is_connection_error() {
                    EXIT_CONNECTION_ERROR
                } else {
                    EXIT_FATAL
                });
            }
        };

        println!();
        println!("📊 Export Summary:");
        println!("  Records Fetched: {}", summary.records_fetched);
        println!("  Excluded (nested units): {}", summary.records_excluded);
        println!("  Rows Written: {}", summary.records_written);
        println!("  Columns: {}", summary.columns.join(", "));
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Output: {}", summary.output_path.display());
        println!();

        if summary.dry_run {
            println!("✅ Dry run completed ({} rows)", summary.records_exported());
        } else {
            println!("✅ Export completed successfully!");
        }

        Ok(EXIT_SUCCESS)
    }
}
