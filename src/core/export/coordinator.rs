//! Export coordinator - main orchestrator for the export process
//!
//! Composes search scope, activity filter, directory query, containing-unit
//! filter, projection and CSV output into one run. Holds no state between
//! runs.

use crate::adapters::directory::{create_directory_provider, DirectoryProvider};
use crate::config::schema::{ExportConfig, OuExportConfig};
use crate::core::activity::ActivityFilter;
use crate::core::export::file_name::{default_output_root, ensure_directory, ExportFile};
use crate::core::export::summary::ExportSummary;
use crate::core::export::writer::{resolve_columns, CsvExportWriter};
use crate::core::org_unit::belongs_to_unit;
use crate::core::scope::SearchSpec;
use crate::domain::request::ExportRequest;
use crate::domain::Result;
use crate::{log_export_complete, log_export_start};
use chrono::{DateTime, Local, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Run settings that come from configuration rather than the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Directory holding the `Exports` tree
    pub output_root: PathBuf,

    /// Activity window for active-only exports
    pub activity: ActivityFilter,

    /// Query and report without writing files
    pub dry_run: bool,
}

impl ExportSettings {
    /// Builds settings from the `[export]` section
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            output_root: config
                .output_root
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(default_output_root),
            activity: ActivityFilter::new(config.activity_cutoff_days),
            dry_run: config.dry_run,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    provider: Arc<dyn DirectoryProvider>,
    settings: ExportSettings,
    writer: CsvExportWriter,
}

impl ExportCoordinator {
    /// Create a coordinator over an open directory session
    pub fn new(provider: Arc<dyn DirectoryProvider>, settings: ExportSettings) -> Self {
        Self {
            provider,
            settings,
            writer: CsvExportWriter::new(),
        }
    }

    /// Create a coordinator from configuration, opening the directory session
    ///
    /// # Errors
    ///
    /// Returns an error if the directory provider cannot be created
    pub async fn from_config(config: &OuExportConfig) -> Result<Self> {
        let provider = create_directory_provider(&config.directory).await?;
        Ok(Self::new(provider, ExportSettings::from_config(&config.export)))
    }

    /// Settings in effect
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Execute an export at the current local time
    pub async fn execute(&self, request: &ExportRequest) -> Result<ExportSummary> {
        self.execute_at(request, Local::now()).await
    }

    /// Execute an export as if run at `now`
    ///
    /// `now` drives both the activity cutoff and the file-name timestamp.
    ///
    /// # Errors
    ///
    /// Directory and filesystem failures abort the run and are returned
    /// unchanged. Nothing is retried.
    pub async fn execute_at(
        &self,
        request: &ExportRequest,
        now: DateTime<Local>,
    ) -> Result<ExportSummary> {
        let start_time = Instant::now();

        log_export_start!(request.organization_unit, request.verbosity);

        let predicate = self
            .settings
            .activity
            .predicate(request.active_only, now.with_timezone(&Utc));
        let spec = SearchSpec::for_request(request, predicate);

        let file = ExportFile::new(&self.settings.output_root, request, now.naive_local());
        if !self.settings.dry_run {
            ensure_directory(file.directory())?;
        }

        tracing::info!(
            directory = %self.provider.describe(),
            base = %spec.base,
            scope = %spec.scope,
            active_only = request.active_only,
            "Querying directory"
        );
        let mut records = self.provider.search(&spec).await?;

        let mut summary = ExportSummary::new(file.path());
        summary.records_fetched = records.len();
        summary.dry_run = self.settings.dry_run;

        if !request.include_nested {
            let unit = request.organization_unit.as_str();
            records.retain(|record| belongs_to_unit(record, unit));
            summary.records_excluded = summary.records_fetched - records.len();
            if summary.records_excluded > 0 {
                tracing::debug!(
                    excluded = summary.records_excluded,
                    unit = %unit,
                    "Dropped records from nested units"
                );
            }
        }

        // Stable; records without a creation time sort first
        records.sort_by_key(|record| record.created());

        summary.columns = resolve_columns(&request.verbosity.selection(), &records);

        if self.settings.dry_run {
            tracing::info!(
                path = %summary.output_path.display(),
                rows = records.len(),
                "Dry run, skipping CSV write"
            );
        } else {
            summary.records_written =
                self.writer
                    .write(&summary.output_path, &records, &summary.columns)?;
        }

        let summary = summary.with_duration(start_time.elapsed());
        log_export_complete!(summary.records_written, summary.duration);
        summary.log_summary();

        Ok(summary)
    }

    /// Close the directory session
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to close
    pub async fn close(&self) -> Result<()> {
        self.provider.close().await
    }
}
