//! Export orchestration
//!
//! This module provides the export pipeline:
//! - File naming and output directories
//! - Column resolution, projection and CSV output
//! - Export coordination and orchestration
//! - Summary and reporting

pub mod coordinator;
pub mod file_name;
pub mod summary;
pub mod writer;

pub use coordinator::{ExportCoordinator, ExportSettings};
pub use file_name::{default_output_root, ensure_directory, ExportFile};
pub use summary::ExportSummary;
pub use writer::{project, resolve_columns, CsvExportWriter};
