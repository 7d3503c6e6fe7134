//! Configuration management for ou-export.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `OUEXPORT_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation of the active directory backend only
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [directory]
//! target = "ldap"
//!
//! [directory.ldap]
//! url = "ldaps://dc01.corp.example.com:636"
//! bind_dn = "CN=svc-export,OU=Service,DC=corp,DC=example,DC=com"
//! bind_password = "${OUEXPORT_BIND_PASSWORD}"
//!
//! [export]
//! output_root = "/opt/ou-export"
//! activity_cutoff_days = 180
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ou_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("ou-export.toml")?;
//! println!("Directory target: {:?}", config.directory.target);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DirectoryConfig, DirectoryTarget, ExportConfig, LdapConfig, LoggingConfig,
    OuExportConfig, SnapshotConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
