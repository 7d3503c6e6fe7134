//! Export request model
//!
//! One [`ExportRequest`] is built per invocation and is immutable afterwards.

use super::errors::OuExportError;
use super::names::{DomainName, OrgUnitName};
use super::result::Result;
use crate::core::attributes::Verbosity;

/// Parameters of a single export
///
/// # Examples
///
/// ```
/// use ou_export::domain::request::ExportRequest;
///
/// let request = ExportRequest::builder()
///     .domain("corp.example.com")
///     .organization_unit("Managers")
///     .active_only(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.organization_unit.as_str(), "Managers");
/// assert!(!request.include_nested);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// DNS domain of the directory (may be empty)
    pub domain: DomainName,

    /// Unit directly below the domain root
    pub organization_unit: OrgUnitName,

    /// Include accounts in nested units
    pub include_nested: bool,

    /// Only export recently active, enabled accounts
    pub active_only: bool,

    /// Column selection
    pub verbosity: Verbosity,
}

impl ExportRequest {
    /// Returns a builder for constructing a request
    pub fn builder() -> ExportRequestBuilder {
        ExportRequestBuilder::default()
    }

    /// `Active` or `All`, as used in export file names
    pub fn population_tag(&self) -> &'static str {
        if self.active_only {
            "Active"
        } else {
            "All"
        }
    }
}

/// Builder for [`ExportRequest`]
#[derive(Debug, Default)]
pub struct ExportRequestBuilder {
    domain: Option<String>,
    organization_unit: Option<String>,
    include_nested: bool,
    active_only: bool,
    verbosity: Option<Verbosity>,
}

impl ExportRequestBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the DNS domain
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the organization unit
    pub fn organization_unit(mut self, unit: impl Into<String>) -> Self {
        self.organization_unit = Some(unit.into());
        self
    }

    /// Includes nested units
    pub fn include_nested(mut self, include_nested: bool) -> Self {
        self.include_nested = include_nested;
        self
    }

    /// Restricts the export to active accounts
    pub fn active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    /// Sets the verbosity (defaults to `Normal`)
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Builds the request
    ///
    /// # Errors
    ///
    /// Returns a validation error if the organization unit is missing or
    /// blank, or the domain is malformed
    pub fn build(self) -> Result<ExportRequest> {
        let domain = DomainName::new(self.domain.unwrap_or_default())
            .map_err(OuExportError::Validation)?;
        let organization_unit = self
            .organization_unit
            .ok_or_else(|| OuExportError::Validation("organization unit is required".to_string()))
            .and_then(|unit| OrgUnitName::new(unit).map_err(OuExportError::Validation))?;

        Ok(ExportRequest {
            domain,
            organization_unit,
            include_nested: self.include_nested,
            active_only: self.active_only,
            verbosity: self.verbosity.unwrap_or(Verbosity::Normal),
        })
    }
}
