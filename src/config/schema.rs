//! Configuration schema types
//!
//! This module defines the configuration structure for ou-export.

use crate::config::SecretString;
use crate::core::activity::DEFAULT_ACTIVITY_CUTOFF_DAYS;
use serde::{Deserialize, Serialize};

/// Directory backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryTarget {
    /// Live directory over LDAP
    Ldap,
    /// JSON snapshot of directory records
    Snapshot,
}

/// Main ou-export configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OuExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Directory backend
    pub directory: DirectoryConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OuExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.directory.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Directory backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Which backend to query (ldap or snapshot)
    pub target: DirectoryTarget,

    /// LDAP connection settings (required if target = ldap)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap: Option<LdapConfig>,

    /// Snapshot settings (required if target = snapshot)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<SnapshotConfig>,
}

impl DirectoryConfig {
    fn validate(&self) -> Result<(), String> {
        // Only the active backend is validated; both sections may be present
        match self.target {
            DirectoryTarget::Ldap => match &self.ldap {
                Some(ldap) => ldap.validate(),
                None => Err(
                    "directory.ldap configuration is required when directory.target = 'ldap'"
                        .to_string(),
                ),
            },
            DirectoryTarget::Snapshot => match &self.snapshot {
                Some(snapshot) => snapshot.validate(),
                None => Err(
                    "directory.snapshot configuration is required when directory.target = 'snapshot'"
                        .to_string(),
                ),
            },
        }
    }
}

/// LDAP connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdapConfig {
    /// Server URL (ldap:// or ldaps://)
    pub url: String,

    /// Bind DN; anonymous bind when unset
    #[serde(default)]
    pub bind_dn: Option<String>,

    /// Bind password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub bind_password: Option<SecretString>,

    /// Upgrade a plain ldap:// connection with StartTLS
    #[serde(default)]
    pub starttls: bool,

    /// TLS certificate verification enabled
    ///
    /// Only disable against test directories with self-signed certificates.
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Page size for paged search results
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

impl LdapConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        let url = url::Url::parse(&self.url)
            .map_err(|e| format!("directory.ldap.url '{}' is not a valid URL: {e}", self.url))?;

        if !matches!(url.scheme(), "ldap" | "ldaps") {
            return Err("directory.ldap.url must start with ldap:// or ldaps://".to_string());
        }

        if url.host_str().map(str::is_empty).unwrap_or(true) {
            return Err("directory.ldap.url must name a host".to_string());
        }

        if self.starttls && url.scheme() == "ldaps" {
            return Err("directory.ldap.starttls cannot be combined with an ldaps:// url".to_string());
        }

        if let Some(bind_dn) = &self.bind_dn {
            if bind_dn.trim().is_empty() {
                return Err("directory.ldap.bind_dn cannot be empty when set".to_string());
            }
            let has_password = self
                .bind_password
                .as_ref()
                .map(|p| !p.expose_secret().is_empty())
                .unwrap_or(false);
            if !has_password {
                return Err(
                    "directory.ldap.bind_password is required when bind_dn is set".to_string(),
                );
            }
        }

        if self.timeout_seconds == 0 {
            return Err("directory.ldap.timeout_seconds must be > 0".to_string());
        }

        if !(1..=10_000).contains(&self.page_size) {
            return Err(format!(
                "directory.ldap.page_size must be between 1 and 10000, got {}",
                self.page_size
            ));
        }

        Ok(())
    }
}

/// Snapshot backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Path to a JSON array of directory records
    pub path: String,
}

impl SnapshotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("directory.snapshot.path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Root directory that holds `Exports/`
    /// Defaults to the directory of the executable
    #[serde(default)]
    pub output_root: Option<String>,

    /// Days since last logon for an account to count as active
    #[serde(default = "default_activity_cutoff_days")]
    pub activity_cutoff_days: u32,

    /// Dry run mode - query and report without writing the CSV file
    #[serde(default)]
    pub dry_run: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=3650).contains(&self.activity_cutoff_days) {
            return Err(format!(
                "export.activity_cutoff_days must be between 1 and 3650, got {}",
                self.activity_cutoff_days
            ));
        }

        if let Some(root) = &self.output_root {
            if root.trim().is_empty() {
                return Err("export.output_root cannot be empty when set".to_string());
            }
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_root: None,
            activity_cutoff_days: default_activity_cutoff_days(),
            dry_run: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    /// Console-only logging, used before a configuration file is available
    pub fn console_only() -> Self {
        Self {
            local_enabled: false,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_page_size() -> i32 {
    500
}

fn default_activity_cutoff_days() -> u32 {
    DEFAULT_ACTIVITY_CUTOFF_DAYS
}

fn default_local_path() -> String {
    "/var/log/ou-export".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn ldap_config() -> LdapConfig {
        LdapConfig {
            url: "ldaps://dc01.corp.example.com:636".to_string(),
            bind_dn: Some("CN=svc-export,OU=Service,DC=corp,DC=example,DC=com".to_string()),
            bind_password: Some(secret_string("pass".to_string())),
            starttls: false,
            tls_verify: true,
            timeout_seconds: 30,
            page_size: 500,
        }
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ldap_config_validation() {
        let mut config = ldap_config();
        assert!(config.validate().is_ok());

        config.url = "https://dc01.corp.example.com".to_string();
        assert!(config.validate().is_err());

        config.url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.url = "ldap://dc01.corp.example.com".to_string();
        config.starttls = true;
        assert!(config.validate().is_ok());

        config.url = "ldaps://dc01.corp.example.com".to_string();
        assert!(config
            .validate()
            .unwrap_err()
            .contains("starttls cannot be combined"));
    }

    #[test]
    fn test_ldap_bind_requires_password() {
        let mut config = ldap_config();
        config.bind_password = None;
        assert!(config.validate().is_err());

        config.bind_password = Some(secret_string(String::new()));
        assert!(config.validate().is_err());

        // Anonymous bind
        config.bind_dn = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ldap_page_size_bounds() {
        let mut config = ldap_config();
        config.page_size = 0;
        assert!(config.validate().is_err());
        config.page_size = 10_001;
        assert!(config.validate().is_err());
        config.page_size = 1000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_directory_target_requires_section() {
        let config = DirectoryConfig {
            target: DirectoryTarget::Ldap,
            ldap: None,
            snapshot: Some(SnapshotConfig {
                path: "users.json".to_string(),
            }),
        };
        assert!(config.validate().is_err());

        let config = DirectoryConfig {
            target: DirectoryTarget::Snapshot,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_export_config_validation() {
        let mut config = ExportConfig::default();
        assert_eq!(config.activity_cutoff_days, 180);
        assert!(config.validate().is_ok());

        config.activity_cutoff_days = 0;
        assert!(config.validate().is_err());

        config.activity_cutoff_days = 90;
        config.output_root = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_path, "/var/log/ou-export");
        assert_eq!(config.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_rotation_validation() {
        let mut config = LoggingConfig::default();
        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_timeout_seconds(), 30);
        assert_eq!(default_page_size(), 500);
        assert_eq!(default_activity_cutoff_days(), 180);
    }
}
