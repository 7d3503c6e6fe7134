//! Directory name types with validation
//!
//! Newtype wrappers for the two names an export is scoped by: the DNS domain
//! and the organizational unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS-style domain name, e.g. `corp.example.com`
///
/// An empty domain is allowed and yields a search base without `DC=` clauses.
///
/// # Examples
///
/// ```
/// use ou_export::domain::names::DomainName;
/// use std::str::FromStr;
///
/// let domain = DomainName::from_str("corp.example.com").unwrap();
/// assert_eq!(domain.labels().collect::<Vec<_>>(), vec!["corp", "example", "com"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainName(String);

impl DomainName {
    /// Creates a new DomainName
    ///
    /// Returns `Err` if the domain contains an empty label (`corp..com`).
    pub fn new(domain: impl Into<String>) -> Result<Self, String> {
        let domain = domain.into().trim().to_string();
        if !domain.is_empty() && domain.split('.').any(|label| label.trim().is_empty()) {
            return Err(format!("Domain '{domain}' contains an empty label"));
        }
        Ok(Self(domain))
    }

    /// Returns the domain as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no domain was given
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the dot-separated labels
    ///
    /// An empty domain yields no labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|label| !label.is_empty())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DomainName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Organizational unit name, e.g. `Managers` or `Sales Team`
///
/// This is the unit's own name (the `OU=` value), not a full path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgUnitName(String);

impl OrgUnitName {
    /// Creates a new OrgUnitName
    ///
    /// Returns `Err` if the name is empty or blank.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Organization unit name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the unit name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The unit name with every whitespace character removed
    ///
    /// Used as the export sub-directory name.
    pub fn without_whitespace(&self) -> String {
        self.0.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl fmt::Display for OrgUnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrgUnitName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for OrgUnitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
