//! Integration tests for logging functionality

use ou_export::config::LoggingConfig;
use ou_export::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_console_only_disables_file_logging() {
    let config = LoggingConfig::console_only();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, LoggingConfig::default().local_path);
}

#[test]
fn test_invalid_level_is_rejected_before_install() {
    let err = init_logging("verbose", &LoggingConfig::console_only())
        .err()
        .unwrap();
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_invalid_rotation_is_rejected_before_install() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        local_enabled: true,
        local_path: temp_dir.path().join("logs").to_string_lossy().to_string(),
        local_rotation: "weekly".to_string(),
    };

    let err = init_logging("info", &config).err().unwrap();
    assert!(err.to_string().contains("Invalid log rotation"));
    assert!(!temp_dir.path().join("logs").exists());
}

// The only test in this binary that installs the global subscriber
#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(!log_path.exists());
    let guard = init_logging("debug", &config).unwrap();
    tracing::info!(unit = "Managers", "Export requested");
    drop(guard);

    assert!(log_path.is_dir());
    assert!(log_path.join("ou-export.log").exists());
}
