// ou-export - Organizational unit user export
// Copyright (c) 2025 ou-export Contributors
// Licensed under the MIT License

//! # ou-export - Organizational unit user export
//!
//! ou-export queries a directory service (Active Directory over LDAP) for the
//! user accounts of one organizational unit, optionally keeps only recently
//! active accounts, selects a configurable set of attributes and writes the
//! result to a dated CSV file.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (attribute selection, scoping, activity, export)
//! - [`adapters`] - Directory providers (LDAP, JSON snapshot)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ou_export::config::load_config;
//! use ou_export::core::attributes::Verbosity;
//! use ou_export::core::export::ExportCoordinator;
//! use ou_export::domain::ExportRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("ou-export.toml")?;
//!     let coordinator = ExportCoordinator::from_config(&config).await?;
//!
//!     let request = ExportRequest::builder()
//!         .domain("corp.example.com")
//!         .organization_unit("Managers")
//!         .active_only(true)
//!         .verbosity("Minimal".parse::<Verbosity>()?)
//!         .build()?;
//!
//!     let summary = coordinator.execute(&request).await?;
//!     println!("Exported {} users to {}", summary.records_written, summary.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Verbosity
//!
//! | keyword | columns |
//! |---|---|
//! | `All` | every attribute returned |
//! | `Verbose` | account, password and logon attributes |
//! | `Normal` | Created, SAMAccountName, Name, DisplayName, Description, LastLogonDate |
//! | `Minimal` | SAMAccountName, Name, LastLogonDate |
//! | `a,b,c` | the listed attributes, in order |
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], backed by
//! [`domain::OuExportError`]. The CLI maps errors to exit codes: 2 for
//! configuration and argument errors, 4 for directory connection errors and
//! 5 for anything else.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
