//! Export file naming and output directories
//!
//! Exports land in `<root>/Exports/<Unit>/Log<Verbosity>-<Active|All>Users-<yyyyMMddHHmm>.csv`,
//! where `<Unit>` is the organization unit with all whitespace removed.

use crate::domain::request::ExportRequest;
use crate::domain::{OuExportError, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory below the output root that holds all exports
pub const EXPORTS_DIR: &str = "Exports";

/// Minute-precision, 24-hour timestamp used in file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Location of one export file
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ou_export::core::attributes::Verbosity;
/// use ou_export::core::export::ExportFile;
/// use ou_export::domain::ExportRequest;
/// use std::path::Path;
///
/// let request = ExportRequest::builder()
///     .organization_unit("Sales Team")
///     .active_only(true)
///     .verbosity(Verbosity::Normal)
///     .build()
///     .unwrap();
/// let at = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(14, 5, 0).unwrap();
///
/// let file = ExportFile::new(Path::new("/srv"), &request, at);
/// assert_eq!(
///     file.path(),
///     Path::new("/srv/Exports/SalesTeam/LogNormal-ActiveUsers-202610171405.csv")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    directory: PathBuf,
    file_name: String,
}

impl ExportFile {
    /// Composes the export location for a request at a given local time
    pub fn new(root: &Path, request: &ExportRequest, timestamp: NaiveDateTime) -> Self {
        let directory = root
            .join(EXPORTS_DIR)
            .join(request.organization_unit.without_whitespace());
        let file_name = format!(
            "Log{}-{}Users-{}.csv",
            request.verbosity.tag(),
            request.population_tag(),
            timestamp.format(TIMESTAMP_FORMAT)
        );
        Self {
            directory,
            file_name,
        }
    }

    /// Directory the file lives in
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Bare file name
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Creates `path` and any missing parents
///
/// Succeeds if the directory already exists.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        OuExportError::Io(format!(
            "Failed to create export directory {}: {}",
            path.display(),
            e
        ))
    })
}

/// Default output root: the directory holding the running executable
///
/// Falls back to the current directory if the executable path is unknown.
pub fn default_output_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
