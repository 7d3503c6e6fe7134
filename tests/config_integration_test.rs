//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX.

use ou_export::config::load_config;
use ou_export::config::schema::DirectoryTarget;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "OUEXPORT_APPLICATION_LOG_LEVEL",
        "OUEXPORT_DIRECTORY_TARGET",
        "OUEXPORT_LDAP_URL",
        "OUEXPORT_LDAP_BIND_DN",
        "OUEXPORT_LDAP_BIND_PASSWORD",
        "OUEXPORT_LDAP_STARTTLS",
        "OUEXPORT_LDAP_PAGE_SIZE",
        "OUEXPORT_SNAPSHOT_PATH",
        "OUEXPORT_EXPORT_OUTPUT_ROOT",
        "OUEXPORT_EXPORT_ACTIVITY_CUTOFF_DAYS",
        "OUEXPORT_EXPORT_DRY_RUN",
        "OUEXPORT_LOGGING_LOCAL_ENABLED",
        "OUEXPORT_LOGGING_LOCAL_PATH",
        "TEST_OUEXPORT_BIND_PASSWORD",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

const LDAP_CONFIG: &str = r#"
[application]
log_level = "debug"

[directory]
target = "ldap"

[directory.ldap]
url = "ldaps://dc01.corp.example.com:636"
bind_dn = "CN=svc-export,OU=Service,DC=corp,DC=example,DC=com"
bind_password = "${TEST_OUEXPORT_BIND_PASSWORD}"
page_size = 250

[export]
output_root = "/srv/reports"
activity_cutoff_days = 90

[logging]
local_enabled = false
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_ldap_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_OUEXPORT_BIND_PASSWORD", "s3cret-from-env");

    let temp_file = write_config(LDAP_CONFIG);
    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.directory.target, DirectoryTarget::Ldap);

    let ldap = config.directory.ldap.as_ref().unwrap();
    assert_eq!(ldap.url, "ldaps://dc01.corp.example.com:636");
    assert_eq!(
        ldap.bind_password.as_ref().unwrap().expose_secret(),
        "s3cret-from-env"
    );
    assert_eq!(ldap.page_size, 250);
    assert_eq!(ldap.timeout_seconds, 30);
    assert!(ldap.tls_verify);

    assert_eq!(config.export.output_root.as_deref(), Some("/srv/reports"));
    assert_eq!(config.export.activity_cutoff_days, 90);
    assert_eq!(config.logging.local_rotation, "hourly");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(LDAP_CONFIG);
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("TEST_OUEXPORT_BIND_PASSWORD"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_OUEXPORT_BIND_PASSWORD", "from-file");
    std::env::set_var("OUEXPORT_LDAP_URL", "ldap://dc02.corp.example.com");
    std::env::set_var("OUEXPORT_LDAP_STARTTLS", "true");
    std::env::set_var("OUEXPORT_LDAP_BIND_PASSWORD", "from-override");
    std::env::set_var("OUEXPORT_EXPORT_ACTIVITY_CUTOFF_DAYS", "30");
    std::env::set_var("OUEXPORT_EXPORT_DRY_RUN", "true");
    std::env::set_var("OUEXPORT_APPLICATION_LOG_LEVEL", "warn");

    let temp_file = write_config(LDAP_CONFIG);
    let config = load_config(temp_file.path()).unwrap();

    let ldap = config.directory.ldap.as_ref().unwrap();
    assert_eq!(ldap.url, "ldap://dc02.corp.example.com");
    assert!(ldap.starttls);
    assert_eq!(
        ldap.bind_password.as_ref().unwrap().expose_secret(),
        "from-override"
    );
    assert_eq!(config.export.activity_cutoff_days, 30);
    assert!(config.export.dry_run);
    assert_eq!(config.application.log_level, "warn");

    cleanup_env_vars();
}

#[test]
fn test_target_override_requires_section() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_OUEXPORT_BIND_PASSWORD", "pw");
    std::env::set_var("OUEXPORT_DIRECTORY_TARGET", "snapshot");

    let temp_file = write_config(LDAP_CONFIG);
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("directory.snapshot"));

    std::env::set_var("OUEXPORT_DIRECTORY_TARGET", "ad");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("OUEXPORT_DIRECTORY_TARGET"));

    cleanup_env_vars();
}

#[test]
fn test_validation_rejects_bad_values() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        (
            r#"
[directory]
target = "ldap"
[directory.ldap]
url = "https://dc01.corp.example.com"
"#,
            "must start with ldap://",
        ),
        (
            r#"
[directory]
target = "snapshot"
[directory.snapshot]
path = "users.json"
[export]
activity_cutoff_days = 0
"#,
            "activity_cutoff_days",
        ),
        (
            r#"
[application]
log_level = "loud"
[directory]
target = "snapshot"
[directory.snapshot]
path = "users.json"
"#,
            "log_level",
        ),
    ];

    for (toml_content, expected) in cases {
        let temp_file = write_config(toml_content);
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "expected '{expected}' in '{err}'"
        );
    }
}

#[test]
fn test_comment_lines_are_not_substituted() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
# bind_password = "${TEST_OUEXPORT_BIND_PASSWORD}"
[directory]
target = "ldap"

[directory.ldap]
url = "ldap://dc01.corp.example.com"
"#,
    );
    let config = load_config(temp_file.path()).unwrap();
    let ldap = config.directory.ldap.unwrap();
    assert!(ldap.bind_dn.is_none());
    assert!(ldap.bind_password.is_none());
}
