//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Sample configuration written by `init`
pub const SAMPLE_CONFIG: &str = r#"# ou-export Configuration File
# Organizational unit user export

[application]
log_level = "info"

[directory]
# ldap | snapshot
target = "ldap"

[directory.ldap]
# ldaps:// for TLS, or ldap:// with starttls = true
url = "ldaps://dc01.corp.example.com:636"
# Omit bind_dn for an anonymous session
bind_dn = "CN=svc-export,OU=Service Accounts,DC=corp,DC=example,DC=com"
bind_password = "${OUEXPORT_BIND_PASSWORD}"
starttls = false
tls_verify = true
timeout_seconds = 30
page_size = 500

# Offline runs against a JSON array of records
# [directory.snapshot]
# path = "users.json"

[export]
# Defaults to the directory of the executable
# output_root = "/opt/ou-export"
activity_cutoff_days = 180
dry_run = false

[logging]
local_enabled = false
local_path = "/var/log/ou-export"
# daily | hourly | never
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "ou-export.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing ou-export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your directory settings", self.output);
                println!("  2. Set OUEXPORT_BIND_PASSWORD (or put it in a .env file)");
                println!("  3. Validate configuration: ou-export validate-config");
                println!(
                    "  4. Run export: ou-export export --domain corp.example.com --organization-unit Managers"
                );
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}
