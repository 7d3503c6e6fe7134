//! Domain models and types for ou-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Validated names** ([`DomainName`], [`OrgUnitName`])
//! - **Directory records** ([`DirectoryRecord`], [`AttributeValue`])
//! - **Export requests** ([`ExportRequest`])
//! - **Error types** ([`OuExportError`], [`DirectoryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, OuExportError>`]:
//!
//! ```rust
//! use ou_export::domain::{ExportRequest, Result};
//!
//! fn example() -> Result<()> {
//!     let request = ExportRequest::builder()
//!         .domain("corp.example.com")
//!         .organization_unit("Managers")
//!         .build()?;
//!     assert_eq!(request.domain.as_str(), "corp.example.com");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod errors;
pub mod names;
pub mod record;
pub mod request;
pub mod result;
pub mod time;

// Re-export commonly used types for convenience
pub use errors::{DirectoryError, OuExportError};
pub use names::{DomainName, OrgUnitName};
pub use record::{AttributeValue, DirectoryRecord};
pub use request::{ExportRequest, ExportRequestBuilder};
pub use result::Result;
