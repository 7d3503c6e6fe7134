//! External system integrations for ou-export.
//!
//! - [`directory`] - Directory provider trait and factory
//! - [`ldap`] - Active Directory over LDAP
//! - [`snapshot`] - Records loaded from a JSON snapshot file
//!
//! # Design Pattern
//!
//! The export pipeline only sees [`directory::DirectoryProvider`]. Tests and
//! offline runs swap the live LDAP session for a snapshot without touching
//! the pipeline.
//!
//! ```rust,no_run
//! use ou_export::adapters::directory::create_directory_provider;
//! use ou_export::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("ou-export.toml")?;
//! let provider = create_directory_provider(&config.directory).await?;
//! println!("Using {}", provider.describe());
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod ldap;
pub mod snapshot;
