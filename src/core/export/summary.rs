//! Export summary and reporting

use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Path of the CSV file (not created in dry-run mode)
    pub output_path: PathBuf,

    /// Records returned by the directory
    pub records_fetched: usize,

    /// Records dropped by the containing-unit filter
    pub records_excluded: usize,

    /// Data rows in the CSV
    pub records_written: usize,

    /// Header columns
    pub columns: Vec<String>,

    /// Whether writing was skipped
    pub dry_run: bool,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            records_fetched: 0,
            records_excluded: 0,
            records_written: 0,
            columns: Vec::new(),
            dry_run: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Records that survived filtering
    pub fn records_exported(&self) -> usize {
        self.records_fetched - self.records_excluded
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            output_path = %self.output_path.display(),
            fetched = self.records_fetched,
            excluded = self.records_excluded,
            written = self.records_written,
            columns = self.columns.len(),
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_new() {
        let summary = ExportSummary::new(PathBuf::from("/tmp/out.csv"));
        assert_eq!(summary.records_fetched, 0);
        assert_eq!(summary.records_written, 0);
        assert!(summary.columns.is_empty());
        assert!(!summary.dry_run);
    }

    #[test]
    fn test_records_exported() {
        let mut summary = ExportSummary::new(PathBuf::from("out.csv"));
        summary.records_fetched = 3;
        summary.records_excluded = 1;
        assert_eq!(summary.records_exported(), 2);
    }

    #[test]
    fn test_with_duration() {
        let summary = ExportSummary::new(PathBuf::from("out.csv"))
            .with_duration(Duration::from_millis(1500));
        assert_eq!(summary.duration, Duration::from_millis(1500));
    }
}
