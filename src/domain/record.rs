//! Directory record model
//!
//! A [`DirectoryRecord`] is the attribute map the directory returns for one
//! user account. It is read-only to the export: the pipeline filters,
//! projects and sorts records but never changes their values.

use super::time::{filetime_to_datetime, parse_timestamp};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known property names
pub mod properties {
    /// Full `/`-delimited path of the entry
    pub const CANONICAL_NAME: &str = "CanonicalName";
    /// Account enabled flag
    pub const ENABLED: &str = "Enabled";
    /// Replicated last logon, as a timestamp
    pub const LAST_LOGON_DATE: &str = "LastLogonDate";
    /// Replicated last logon, as raw FILETIME
    pub const LAST_LOGON_TIMESTAMP: &str = "lastLogonTimestamp";
    /// Creation time
    pub const CREATED: &str = "Created";
    /// Raw account control flags
    pub const USER_ACCOUNT_CONTROL: &str = "userAccountControl";
}

/// A single attribute value
///
/// Serialized untagged so snapshot files read as plain JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag
    Bool(bool),
    /// Integer value (FILETIMEs, flags, counters)
    Integer(i64),
    /// Point in time
    Timestamp(DateTime<Utc>),
    /// Single string
    Text(String),
    /// Multi-valued string attribute
    Multi(Vec<String>),
}

impl AttributeValue {
    /// Renders the value as a CSV field
    ///
    /// Booleans render as `True`/`False`, timestamps as RFC 3339 and
    /// multi-valued attributes joined with `;`.
    pub fn to_field(&self) -> String {
        match self {
            AttributeValue::Bool(true) => "True".to_string(),
            AttributeValue::Bool(false) => "False".to_string(),
            AttributeValue::Integer(i) => i.to_string(),
            AttributeValue::Timestamp(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            AttributeValue::Text(s) => s.clone(),
            AttributeValue::Multi(values) => values.join(";"),
        }
    }

    /// Returns the value as a string slice if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interprets the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            AttributeValue::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
            AttributeValue::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// Interprets the value as an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            AttributeValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Interprets the value as a timestamp
    ///
    /// Integers are not interpreted here; FILETIME attributes are converted by
    /// the accessor that knows the attribute is one.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AttributeValue::Timestamp(dt) => Some(*dt),
            AttributeValue::Text(s) => parse_timestamp(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::Timestamp(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        AttributeValue::Multi(value)
    }
}

/// One directory entry as an attribute map
///
/// Attribute lookups are case-insensitive, like the directory's own.
///
/// # Examples
///
/// ```
/// use ou_export::domain::record::DirectoryRecord;
///
/// let record = DirectoryRecord::new()
///     .with("SAMAccountName", "jdoe")
///     .with("Enabled", true);
///
/// assert_eq!(record.get_text("samaccountname"), Some("jdoe"));
/// assert_eq!(record.enabled(), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryRecord {
    attributes: BTreeMap<String, AttributeValue>,
}

impl DirectoryRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces an attribute
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Looks up an attribute, ignoring ASCII case
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name).or_else(|| {
            self.attributes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }

    /// Looks up a text attribute
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_text)
    }

    /// Returns true if the attribute is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Attribute names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if the record has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The `/`-delimited canonical name
    pub fn canonical_name(&self) -> Option<&str> {
        self.get_text(properties::CANONICAL_NAME)
    }

    /// Whether the account is enabled
    ///
    /// Reads `Enabled`, falling back to the ACCOUNTDISABLE bit of
    /// `userAccountControl`.
    pub fn enabled(&self) -> Option<bool> {
        if let Some(enabled) = self.get(properties::ENABLED).and_then(AttributeValue::as_bool) {
            return Some(enabled);
        }
        self.get(properties::USER_ACCOUNT_CONTROL)
            .and_then(AttributeValue::as_integer)
            .map(|uac| uac & 0x2 == 0)
    }

    /// Last replicated logon time
    ///
    /// Reads `LastLogonDate`, falling back to the raw `lastLogonTimestamp`
    /// FILETIME.
    pub fn last_logon(&self) -> Option<DateTime<Utc>> {
        if let Some(dt) = self
            .get(properties::LAST_LOGON_DATE)
            .and_then(AttributeValue::as_timestamp)
        {
            return Some(dt);
        }
        match self.get(properties::LAST_LOGON_TIMESTAMP)? {
            AttributeValue::Timestamp(dt) => Some(*dt),
            other => other.as_integer().and_then(filetime_to_datetime),
        }
    }

    /// Creation time
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.get(properties::CREATED)
            .or_else(|| self.get("whenCreated"))
            .and_then(AttributeValue::as_timestamp)
    }

    /// CSV field for an attribute; empty when the attribute is absent
    pub fn field(&self, name: &str) -> String {
        self.get(name)
            .map(AttributeValue::to_field)
            .unwrap_or_default()
    }
}

impl FromIterator<(String, AttributeValue)> for DirectoryRecord {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}
