//! Logging and observability
//!
//! Structured logging with:
//! - Configurable log levels (`RUST_LOG` overrides the configured level)
//! - Human-readable console output on stderr
//! - Optional JSON log files with daily/hourly rotation
//!
//! # Example
//!
//! ```no_run
//! use ou_export::logging::init_logging;
//! use ou_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(unit = "Managers", "Export requested");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use ou_export::log_export_start;
/// use ou_export::core::attributes::Verbosity;
///
/// log_export_start!("Managers", Verbosity::Normal);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($unit:expr, $verbosity:expr) => {
        tracing::info!(
            unit = %$unit,
            verbosity = %$verbosity,
            "Starting export"
        );
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use ou_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_millis(850));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Export finished"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use ou_export::log_error_with_context;
/// use ou_export::domain::OuExportError;
///
/// let error = OuExportError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::core::attributes::Verbosity;
    use crate::domain::OuExportError;
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_export_start!("Managers", Verbosity::Minimal);
        log_export_complete!(3_usize, Duration::from_millis(10));
        let error = OuExportError::Export("disk full".to_string());
        log_error_with_context!(&error, "Failed to write export");
    }
}
