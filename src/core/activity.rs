//! Activity filtering
//!
//! An active account is enabled and has logged on within the cutoff window.
//! The same predicate is rendered as an LDAP filter for the directory query
//! and evaluated in memory by providers that cannot push it down.

use crate::domain::record::DirectoryRecord;
use crate::domain::time::datetime_to_filetime;
use chrono::{DateTime, Duration, Utc};

/// Default activity window in days
pub const DEFAULT_ACTIVITY_CUTOFF_DAYS: u32 = 180;

/// LDAP clause selecting user accounts
const USER_OBJECT_FILTER: &str = "(objectCategory=person)(objectClass=user)";

/// Matching-rule OID for bitwise AND on `userAccountControl`
const LDAP_MATCHING_RULE_BIT_AND: &str = "1.2.840.113556.1.4.803";

/// Builds activity predicates for a fixed cutoff window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityFilter {
    cutoff_days: u32,
}

impl ActivityFilter {
    /// Creates a filter with the given cutoff in days
    pub fn new(cutoff_days: u32) -> Self {
        Self { cutoff_days }
    }

    /// The cutoff window in days
    pub fn cutoff_days(&self) -> u32 {
        self.cutoff_days
    }

    /// Predicate for an export
    ///
    /// With `active_only == false` every record matches.
    pub fn predicate(&self, active_only: bool, now: DateTime<Utc>) -> ActivityPredicate {
        if !active_only {
            return ActivityPredicate::MatchAll;
        }
        ActivityPredicate::Active {
            threshold: now - Duration::days(i64::from(self.cutoff_days)),
        }
    }
}

impl Default for ActivityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CUTOFF_DAYS)
    }
}

/// Record predicate of an export query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityPredicate {
    /// Every user account
    MatchAll,
    /// Enabled accounts whose last logon is strictly after `threshold`
    Active { threshold: DateTime<Utc> },
}

impl ActivityPredicate {
    /// Evaluates the predicate against a record
    pub fn matches(&self, record: &DirectoryRecord) -> bool {
        match self {
            ActivityPredicate::MatchAll => true,
            ActivityPredicate::Active { threshold } => {
                record.enabled() == Some(true)
                    && record
                        .last_logon()
                        .is_some_and(|last_logon| last_logon > *threshold)
            }
        }
    }

    /// Renders the predicate as an LDAP search filter
    ///
    /// LDAP only offers `>=`, so the strict comparison is expressed as
    /// `>= threshold + 1 tick`.
    pub fn to_ldap_filter(&self) -> String {
        match self {
            ActivityPredicate::MatchAll => format!("(&{USER_OBJECT_FILTER})"),
            ActivityPredicate::Active { threshold } => format!(
                "(&{USER_OBJECT_FILTER}(lastLogonTimestamp>={})(!(userAccountControl:{LDAP_MATCHING_RULE_BIT_AND}:=2)))",
                datetime_to_filetime(*threshold) + 1
            ),
        }
    }
}
