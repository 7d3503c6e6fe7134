//! Organization-unit resolution from canonical names
//!
//! A canonical name is the `/`-delimited path of an entry, e.g.
//! `corp.example.com/Staff/Managers/jdoe`. The containing unit of that entry
//! is the segment before the last one (`Managers`).

use crate::domain::record::DirectoryRecord;
use thiserror::Error;

/// Why a canonical name has no containing unit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalNameError {
    /// The canonical name has no segments at all
    #[error("canonical name is empty")]
    Empty,
    /// The canonical name is a single segment with nothing above it
    #[error("canonical name '{0}' has no parent segment")]
    SingleSegment(String),
}

/// Returns the immediate containing unit of a canonical name
///
/// # Examples
///
/// ```
/// use ou_export::core::org_unit::{containing_unit, CanonicalNameError};
///
/// assert_eq!(containing_unit("dom/OU1/OU2/jdoe"), Ok("OU2"));
/// assert_eq!(containing_unit(""), Err(CanonicalNameError::Empty));
/// ```
pub fn containing_unit(canonical_name: &str) -> Result<&str, CanonicalNameError> {
    if canonical_name.is_empty() {
        return Err(CanonicalNameError::Empty);
    }
    let segments: Vec<&str> = canonical_name.split('/').collect();
    match segments.len() {
        0 => Err(CanonicalNameError::Empty),
        1 => Err(CanonicalNameError::SingleSegment(canonical_name.to_string())),
        n => Ok(segments[n - 2]),
    }
}

/// Returns true if the record sits directly in `unit`
///
/// Comparison is exact and case-sensitive. Records without a usable
/// canonical name never match.
pub fn belongs_to_unit(record: &DirectoryRecord, unit: &str) -> bool {
    let Some(canonical_name) = record.canonical_name() else {
        tracing::debug!("Record has no CanonicalName, excluding from unit filter");
        return false;
    };
    match containing_unit(canonical_name) {
        Ok(parent) => parent == unit,
        Err(e) => {
            tracing::debug!(
                canonical_name = %canonical_name,
                reason = %e,
                "Cannot resolve containing unit, excluding record"
            );
            false
        }
    }
}
