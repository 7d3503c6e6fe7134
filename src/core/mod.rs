//! Core business logic for ou-export.
//!
//! # Modules
//!
//! - [`attributes`] - Verbosity keywords and attribute selection
//! - [`org_unit`] - Containing-unit resolution from canonical names
//! - [`scope`] - Search base and scope construction
//! - [`activity`] - Active-account predicate and its LDAP rendering
//! - [`export`] - Export orchestration, CSV output and summary
//!
//! # Export Workflow
//!
//! 1. **Scope**: Build the search base and depth from domain, unit and nested flag
//! 2. **Filter**: Derive the activity predicate (or match-all)
//! 3. **Prepare**: Ensure `<root>/Exports/<Unit>/` exists and name the file
//! 4. **Query**: Fetch every attribute of matching records from the directory
//! 5. **Narrow**: Drop records from nested units unless requested
//! 6. **Project & Sort**: Select columns, order by creation time
//! 7. **Write**: Emit the CSV
//!
//! # Example
//!
//! ```rust,no_run
//! use ou_export::config::load_config;
//! use ou_export::core::export::ExportCoordinator;
//! use ou_export::domain::ExportRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("ou-export.toml")?;
//! let coordinator = ExportCoordinator::from_config(&config).await?;
//!
//! let request = ExportRequest::builder()
//!     .domain("corp.example.com")
//!     .organization_unit("Managers")
//!     .active_only(true)
//!     .build()?;
//!
//! let summary = coordinator.execute(&request).await?;
//! println!("Wrote {} rows to {}", summary.records_written, summary.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod attributes;
pub mod export;
pub mod org_unit;
pub mod scope;
