//! Snapshot directory provider
//!
//! Serves records from a JSON array (one object per account, attribute name
//! to value), typically exported once from a live directory. Search bases
//! and scopes are emulated against each record's canonical name, and the
//! activity predicate is evaluated in memory.

use crate::adapters::directory::traits::DirectoryProvider;
use crate::core::scope::{SearchScope, SearchSpec};
use crate::domain::errors::DirectoryError;
use crate::domain::record::DirectoryRecord;
use crate::domain::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// In-memory directory
#[derive(Debug, Clone)]
pub struct SnapshotDirectory {
    records: Vec<DirectoryRecord>,
    source: String,
}

impl SnapshotDirectory {
    /// Creates a directory over the given records
    pub fn new(records: Vec<DirectoryRecord>) -> Self {
        let source = format!("snapshot ({} records)", records.len());
        Self { records, source }
    }

    /// Loads a JSON snapshot file
    ///
    /// # Errors
    ///
    /// Returns `SnapshotUnreadable` if the file cannot be read or is not a
    /// JSON array of objects.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            DirectoryError::SnapshotUnreadable(format!("{}: {}", path.display(), e))
        })?;
        let records: Vec<DirectoryRecord> = serde_json::from_str(&contents).map_err(|e| {
            DirectoryError::SnapshotUnreadable(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), count = records.len(), "Loaded directory snapshot");

        Ok(Self {
            source: format!("snapshot ({})", path.display()),
            records,
        })
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl DirectoryProvider for SnapshotDirectory {
    fn describe(&self) -> String {
        self.source.clone()
    }

    async fn search(&self, spec: &SearchSpec) -> Result<Vec<DirectoryRecord>> {
        let base = SearchBase::parse(&spec.base)?;

        let records: Vec<DirectoryRecord> = self
            .records
            .iter()
            .filter(|record| {
                record
                    .canonical_name()
                    .is_some_and(|cn| base.contains(cn, spec.scope))
            })
            .filter(|record| spec.filter.matches(record))
            .cloned()
            .collect();

        tracing::debug!(
            base = %spec.base,
            scope = %spec.scope,
            count = records.len(),
            "Snapshot search completed"
        );
        Ok(records)
    }
}

/// A search base DN split into domain and container path
#[derive(Debug, PartialEq, Eq)]
struct SearchBase {
    /// `DC` labels joined with `.`; empty when the DN has none
    domain: String,
    /// Container names from the domain root downwards
    path: Vec<String>,
}

impl SearchBase {
    fn parse(dn: &str) -> Result<Self> {
        let mut domain_labels = Vec::new();
        let mut path = Vec::new();

        for rdn in split_unescaped(dn, ',') {
            let (kind, value) = rdn.split_once('=').ok_or_else(|| {
                DirectoryError::InvalidSearchBase(format!("{dn}: malformed RDN '{rdn}'"))
            })?;
            let value = unescape_dn_value(value.trim());
            match kind.trim().to_ascii_uppercase().as_str() {
                "DC" => domain_labels.push(value),
                "OU" | "CN" => path.push(value),
                other => {
                    return Err(DirectoryError::InvalidSearchBase(format!(
                        "{dn}: unsupported attribute type '{other}'"
                    ))
                    .into())
                }
            }
        }

        if path.is_empty() {
            return Err(DirectoryError::InvalidSearchBase(format!(
                "{dn}: no container in search base"
            ))
            .into());
        }

        path.reverse();
        Ok(Self {
            domain: domain_labels.join("."),
            path,
        })
    }

    /// Returns true if the entry with this canonical name is in scope
    ///
    /// DN comparison is case-insensitive. A base without `DC` components
    /// matches entries of any domain.
    fn contains(&self, canonical_name: &str, scope: SearchScope) -> bool {
        let mut segments = canonical_name.split('/');
        let Some(domain) = segments.next() else {
            return false;
        };
        if !self.domain.is_empty() && !domain.eq_ignore_ascii_case(&self.domain) {
            return false;
        }

        let rest: Vec<&str> = segments.collect();
        let Some((_leaf, containers)) = rest.split_last() else {
            return false;
        };

        let in_subtree = containers.len() >= self.path.len()
            && self
                .path
                .iter()
                .zip(containers.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b));

        match scope {
            SearchScope::Subtree => in_subtree,
            SearchScope::OneLevel => in_subtree && containers.len() == self.path.len(),
        }
    }
}

/// Splits on `separator` where it is not preceded by a backslash escape
fn split_unescaped(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, ch) in input.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == separator {
            parts.push(&input[start..i]);
            start = i + ch.len_utf8();
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Reverses RFC 4514 escaping (`\,` and `\HH` forms)
fn unescape_dn_value(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            let hex = value
                .get(i + 1..i + 3)
                .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|h| u8::from_str_radix(h, 16).ok());
            match hex {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(bytes[i + 1]);
                    i += 2;
                }
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
