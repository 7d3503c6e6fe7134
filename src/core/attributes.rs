//! Attribute selection
//!
//! Maps a verbosity keyword, or an explicit comma-separated attribute list,
//! to the columns projected into the CSV.

use crate::domain::{OuExportError, Result};
use std::fmt;
use std::str::FromStr;

const VERBOSE_ATTRIBUTES: &[&str] = &[
    "Created",
    "ObjectClass",
    "ObjectGUID",
    "objectSid",
    "MemberOf",
    "CanonicalName",
    "SAMAccountName",
    "Name",
    "DisplayName",
    "GivenName",
    "Initials",
    "OtherName",
    "Description",
    "Title",
    "Enabled",
    "LockedOut",
    "HomeDirectory",
    "HomeDrive",
    "ScriptPath",
    "PasswordExpired",
    "PasswordNeverExpires",
    "PasswordNotRequired",
    "CannotChangePassword",
    "lastLogoff",
    "lastLogon",
    "LastLogonDate",
    "lastLogonTimestamp",
];

const NORMAL_ATTRIBUTES: &[&str] = &[
    "Created",
    "SAMAccountName",
    "Name",
    "DisplayName",
    "Description",
    "LastLogonDate",
];

const MINIMAL_ATTRIBUTES: &[&str] = &["SAMAccountName", "Name", "LastLogonDate"];

/// Which attributes to take from each record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSelection {
    /// Every attribute the record carries
    Wildcard,
    /// These columns, in this order
    Columns(Vec<String>),
}

impl AttributeSelection {
    /// Returns true for the wildcard selection
    pub fn is_wildcard(&self) -> bool {
        matches!(self, AttributeSelection::Wildcard)
    }
}

/// Verbosity of an export
///
/// # Examples
///
/// ```
/// use ou_export::core::attributes::{AttributeSelection, Verbosity};
///
/// let verbosity: Verbosity = "minimal".parse().unwrap();
/// assert_eq!(
///     verbosity.selection(),
///     AttributeSelection::Columns(vec![
///         "SAMAccountName".to_string(),
///         "Name".to_string(),
///         "LastLogonDate".to_string(),
///     ])
/// );
///
/// let custom: Verbosity = "mail, department".parse().unwrap();
/// assert_eq!(custom, Verbosity::Custom(vec!["mail".into(), "department".into()]));
///
/// assert!("Normla".parse::<Verbosity>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verbosity {
    /// Every attribute
    All,
    /// Extended account and password attributes
    Verbose,
    /// Identity, description and last logon
    Normal,
    /// Account name and last logon only
    Minimal,
    /// Explicit attribute list
    Custom(Vec<String>),
}

impl Verbosity {
    /// Columns to project for this verbosity
    pub fn selection(&self) -> AttributeSelection {
        let columns = match self {
            Verbosity::All => return AttributeSelection::Wildcard,
            Verbosity::Verbose => VERBOSE_ATTRIBUTES,
            Verbosity::Normal => NORMAL_ATTRIBUTES,
            Verbosity::Minimal => MINIMAL_ATTRIBUTES,
            Verbosity::Custom(list) => return AttributeSelection::Columns(list.clone()),
        };
        AttributeSelection::Columns(columns.iter().map(|c| c.to_string()).collect())
    }

    /// Tag used in export file names (`Log<tag>-...`)
    pub fn tag(&self) -> &'static str {
        match self {
            Verbosity::All => "All",
            Verbosity::Verbose => "Verbose",
            Verbosity::Normal => "Normal",
            Verbosity::Minimal => "Minimal",
            Verbosity::Custom(_) => "Custom",
        }
    }
}

impl FromStr for Verbosity {
    type Err = OuExportError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "ALL" => return Ok(Verbosity::All),
            "VERBOSE" => return Ok(Verbosity::Verbose),
            "NORMAL" => return Ok(Verbosity::Normal),
            "MINIMAL" => return Ok(Verbosity::Minimal),
            _ => {}
        }

        if !trimmed.contains(',') {
            return Err(OuExportError::Validation(format!(
                "Unknown verbosity '{trimmed}'. Use All, Verbose, Normal, Minimal \
                 or a comma-separated attribute list (e.g. 'mail,' for a single attribute)"
            )));
        }

        let stripped: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
        let attributes: Vec<String> = stripped
            .split(',')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if attributes.is_empty() {
            return Err(OuExportError::Validation(format!(
                "Attribute list '{trimmed}' names no attributes"
            )));
        }

        Ok(Verbosity::Custom(attributes))
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Custom(list) => write!(f, "{}", list.join(",")),
            other => write!(f, "{}", other.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn columns(selection: AttributeSelection) -> Vec<String> {
        match selection {
            AttributeSelection::Columns(c) => c,
            AttributeSelection::Wildcard => panic!("expected columns"),
        }
    }

    #[test_case("ALL" ; "upper")]
    #[test_case("all" ; "lower")]
    #[test_case(" All " ; "padded")]
    fn test_all_is_wildcard(input: &str) {
        let verbosity: Verbosity = input.parse().unwrap();
        assert_eq!(verbosity, Verbosity::All);
        assert!(verbosity.selection().is_wildcard());
    }

    #[test_case("NORMAL", Verbosity::Normal ; "normal upper")]
    #[test_case("Normal", Verbosity::Normal ; "normal mixed")]
    #[test_case("verbose", Verbosity::Verbose ; "verbose lower")]
    #[test_case("MiNiMaL", Verbosity::Minimal ; "minimal mixed")]
    fn test_keywords_case_insensitive(input: &str, expected: Verbosity) {
        assert_eq!(input.parse::<Verbosity>().unwrap(), expected);
    }

    #[test]
    fn test_normal_columns() {
        assert_eq!(
            columns(Verbosity::Normal.selection()),
            vec![
                "Created",
                "SAMAccountName",
                "Name",
                "DisplayName",
                "Description",
                "LastLogonDate"
            ]
        );
    }

    #[test]
    fn test_minimal_columns() {
        assert_eq!(
            columns(Verbosity::Minimal.selection()),
            vec!["SAMAccountName", "Name", "LastLogonDate"]
        );
    }

    #[test]
    fn test_verbose_columns() {
        let cols = columns(Verbosity::Verbose.selection());
        assert_eq!(cols.len(), 27);
        assert_eq!(cols.first().map(String::as_str), Some("Created"));
        assert_eq!(cols.last().map(String::as_str), Some("lastLogonTimestamp"));
        assert!(cols.contains(&"CannotChangePassword".to_string()));
    }

    #[test]
    fn test_custom_list_strips_whitespace() {
        let verbosity: Verbosity = "A, B,C".parse().unwrap();
        assert_eq!(
            columns(verbosity.selection()),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn test_custom_list_keeps_order_and_duplicates() {
        let verbosity: Verbosity = "mail,Name , mail".parse().unwrap();
        assert_eq!(
            verbosity,
            Verbosity::Custom(vec!["mail".into(), "Name".into(), "mail".into()])
        );
        assert_eq!(verbosity.tag(), "Custom");
    }

    #[test]
    fn test_single_custom_attribute_with_trailing_comma() {
        let verbosity: Verbosity = "mail,".parse().unwrap();
        assert_eq!(verbosity, Verbosity::Custom(vec!["mail".into()]));
    }

    #[test]
    fn test_mistyped_keyword_is_rejected() {
        let err = "Normla".parse::<Verbosity>().unwrap_err();
        assert!(matches!(err, OuExportError::Validation(_)));
        assert!(err.to_string().contains("Normla"));
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(",,".parse::<Verbosity>().is_err());
        assert!("".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_tags() {
        assert_eq!(Verbosity::All.tag(), "All");
        assert_eq!(Verbosity::Verbose.tag(), "Verbose");
        assert_eq!(Verbosity::Normal.tag(), "Normal");
        assert_eq!(Verbosity::Minimal.tag(), "Minimal");
    }
}
