//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DirectoryTarget, OuExportConfig};
use super::secret::secret_string;
use crate::domain::errors::OuExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into OuExportConfig
/// 4. Applies environment variable overrides (OUEXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use ou_export::config::loader::load_config;
///
/// let config = load_config("ou-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OuExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OuExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        OuExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: OuExportConfig = toml::from_str(&contents)
        .map_err(|e| OuExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        OuExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| OuExportError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(OuExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the OUEXPORT_* prefix
///
/// Variables follow the pattern OUEXPORT_<SECTION>_<KEY>, for example
/// OUEXPORT_LDAP_URL or OUEXPORT_EXPORT_OUTPUT_ROOT.
fn apply_env_overrides(config: &mut OuExportConfig) -> Result<()> {
    if let Ok(val) = std::env::var("OUEXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("OUEXPORT_DIRECTORY_TARGET") {
        config.directory.target = match val.to_lowercase().as_str() {
            "ldap" => DirectoryTarget::Ldap,
            "snapshot" => DirectoryTarget::Snapshot,
            other => {
                return Err(OuExportError::Configuration(format!(
                    "Invalid OUEXPORT_DIRECTORY_TARGET '{other}'. Must be one of: ldap, snapshot"
                )))
            }
        };
    }

    // LDAP overrides (only if the section is configured)
    if let Some(ref mut ldap) = config.directory.ldap {
        if let Ok(val) = std::env::var("OUEXPORT_LDAP_URL") {
            ldap.url = val;
        }
        if let Ok(val) = std::env::var("OUEXPORT_LDAP_BIND_DN") {
            ldap.bind_dn = Some(val);
        }
        if let Ok(val) = std::env::var("OUEXPORT_LDAP_BIND_PASSWORD") {
            ldap.bind_password = Some(secret_string(val));
        }
        if let Ok(val) = std::env::var("OUEXPORT_LDAP_STARTTLS") {
            ldap.starttls = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("OUEXPORT_LDAP_PAGE_SIZE") {
            if let Ok(size) = val.parse() {
                ldap.page_size = size;
            }
        }
    }

    if let Some(ref mut snapshot) = config.directory.snapshot {
        if let Ok(val) = std::env::var("OUEXPORT_SNAPSHOT_PATH") {
            snapshot.path = val;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("OUEXPORT_EXPORT_OUTPUT_ROOT") {
        config.export.output_root = Some(val);
    }
    if let Ok(val) = std::env::var("OUEXPORT_EXPORT_ACTIVITY_CUTOFF_DAYS") {
        if let Ok(days) = val.parse() {
            config.export.activity_cutoff_days = days;
        }
    }
    if let Ok(val) = std::env::var("OUEXPORT_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("OUEXPORT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("OUEXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
