//! Search base and scope construction

use super::activity::ActivityPredicate;
use super::attributes::AttributeSelection;
use crate::domain::names::{DomainName, OrgUnitName};
use crate::domain::request::ExportRequest;
use std::fmt;

/// Depth of a directory search below its base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Immediate children of the base only
    OneLevel,
    /// The base and all descendants
    Subtree,
}

impl SearchScope {
    /// Scope for an export that does or does not include nested units
    pub fn from_nested(include_nested: bool) -> Self {
        if include_nested {
            SearchScope::Subtree
        } else {
            SearchScope::OneLevel
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::OneLevel => write!(f, "one-level"),
            SearchScope::Subtree => write!(f, "subtree"),
        }
    }
}

/// Everything a directory provider needs to run the export query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    /// Distinguished name the search starts at
    pub base: String,
    /// Search depth
    pub scope: SearchScope,
    /// Record predicate
    pub filter: ActivityPredicate,
    /// Attributes to fetch
    pub attributes: AttributeSelection,
}

impl SearchSpec {
    /// Builds the search for an export of `unit` in `domain`
    ///
    /// Always fetches every attribute; column selection happens after the
    /// query.
    pub fn new(
        domain: &DomainName,
        unit: &OrgUnitName,
        include_nested: bool,
        filter: ActivityPredicate,
    ) -> Self {
        Self {
            base: search_base(domain, unit),
            scope: SearchScope::from_nested(include_nested),
            filter,
            attributes: AttributeSelection::Wildcard,
        }
    }

    /// Builds the search for an export request
    pub fn for_request(request: &ExportRequest, filter: ActivityPredicate) -> Self {
        Self::new(
            &request.domain,
            &request.organization_unit,
            request.include_nested,
            filter,
        )
    }
}

/// Builds `OU=<unit>,DC=<label>,...` for a unit directly below the domain root
///
/// # Examples
///
/// ```
/// use ou_export::core::scope::search_base;
/// use ou_export::domain::{DomainName, OrgUnitName};
///
/// let domain = DomainName::new("com.org.local").unwrap();
/// let unit = OrgUnitName::new("Managers").unwrap();
/// assert_eq!(search_base(&domain, &unit), "OU=Managers,DC=com,DC=org,DC=local");
/// ```
pub fn search_base(domain: &DomainName, unit: &OrgUnitName) -> String {
    let mut base = format!("OU={}", escape_dn_value(unit.as_str()));
    for label in domain.labels() {
        base.push_str(",DC=");
        base.push_str(&escape_dn_value(label));
    }
    base
}

/// Escapes a DN attribute value per RFC 4514
fn escape_dn_value(value: &str) -> String {
    let char_count = value.chars().count();
    let mut result = String::with_capacity(value.len() * 2);

    for (i, ch) in value.chars().enumerate() {
        let is_first = i == 0;
        let is_last = i + 1 == char_count;

        match ch {
            ',' | '+' | '"' | '\\' | '<' | '>' | ';' | '=' => {
                result.push('\\');
                result.push(ch);
            }
            '\0' => result.push_str("\\00"),
            ' ' if is_first || is_last => result.push_str("\\20"),
            '#' if is_first => result.push_str("\\23"),
            _ => result.push(ch),
        }
    }

    result
}
