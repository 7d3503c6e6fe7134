//! Active Directory entry conversion
//!
//! Turns raw LDAP entries into [`DirectoryRecord`]s and derives the friendly
//! account properties (`Enabled`, `LastLogonDate`, `LockedOut`, ...) from
//! the raw attributes they are computed from.

use crate::domain::record::{properties, AttributeValue, DirectoryRecord};
use crate::domain::time::{filetime_to_datetime, parse_generalized_time};
use ldap3::SearchEntry;
use uuid::Uuid;

/// userAccountControl: account disabled
const UF_ACCOUNTDISABLE: i64 = 0x2;
/// userAccountControl: password not required
const UF_PASSWD_NOTREQD: i64 = 0x20;
/// userAccountControl: user cannot change password
const UF_PASSWD_CANT_CHANGE: i64 = 0x40;
/// userAccountControl: password never expires
const UF_DONT_EXPIRE_PASSWD: i64 = 0x1_0000;
/// msDS-User-Account-Control-Computed: locked out
const UF_LOCKOUT: i64 = 0x10;
/// msDS-User-Account-Control-Computed: password expired
const UF_PASSWORD_EXPIRED: i64 = 0x80_0000;

const COMPUTED_ACCOUNT_CONTROL: &str = "msDS-User-Account-Control-Computed";

/// Attributes AD stores as integers (flags, counters, FILETIMEs)
const INTEGER_ATTRIBUTES: &[&str] = &[
    "userAccountControl",
    COMPUTED_ACCOUNT_CONTROL,
    "lastLogonTimestamp",
    "lastLogon",
    "lastLogoff",
    "pwdLastSet",
    "accountExpires",
    "badPasswordTime",
    "badPwdCount",
    "logonCount",
    "lockoutTime",
    "primaryGroupID",
    "sAMAccountType",
    "instanceType",
    "uSNCreated",
    "uSNChanged",
];

/// Attributes in LDAP GeneralizedTime syntax
const GENERALIZED_TIME_ATTRIBUTES: &[&str] = &["whenCreated", "whenChanged"];

/// Attributes always exported as lists, even with a single value
const MULTI_VALUED_ATTRIBUTES: &[&str] = &["memberOf", "objectClass", "proxyAddresses"];

fn is_one_of(name: &str, list: &[&str]) -> bool {
    list.iter().any(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Converts a search entry into a record with derived properties
pub fn entry_to_record(entry: SearchEntry) -> DirectoryRecord {
    let mut record = DirectoryRecord::new();

    for (name, mut values) in entry.attrs {
        if name.eq_ignore_ascii_case("objectGUID") || name.eq_ignore_ascii_case("objectSid") {
            if let Some(value) = values.pop() {
                insert_binary(&mut record, &name, value.as_bytes());
            }
            continue;
        }
        if let Some(value) = convert_values(&name, values) {
            record.insert(name, value);
        }
    }

    for (name, mut values) in entry.bin_attrs {
        if let Some(value) = values.pop() {
            insert_binary(&mut record, &name, &value);
        }
    }

    derive_properties(&mut record, &entry.dn);
    record
}

fn convert_values(name: &str, mut values: Vec<String>) -> Option<AttributeValue> {
    if values.is_empty() {
        return None;
    }
    if is_one_of(name, MULTI_VALUED_ATTRIBUTES) || values.len() > 1 {
        return Some(AttributeValue::Multi(values));
    }
    let value = values.remove(0);

    if is_one_of(name, INTEGER_ATTRIBUTES) {
        if let Ok(i) = value.parse::<i64>() {
            return Some(AttributeValue::Integer(i));
        }
    }
    if is_one_of(name, GENERALIZED_TIME_ATTRIBUTES) {
        if let Some(dt) = parse_generalized_time(&value) {
            return Some(AttributeValue::Timestamp(dt));
        }
    }
    Some(AttributeValue::Text(value))
}

fn insert_binary(record: &mut DirectoryRecord, name: &str, bytes: &[u8]) {
    if name.eq_ignore_ascii_case("objectGUID") {
        match Uuid::from_slice_le(bytes) {
            Ok(guid) => record.insert("ObjectGUID", guid.to_string()),
            Err(e) => tracing::debug!(error = %e, "Ignoring malformed objectGUID"),
        }
    } else if name.eq_ignore_ascii_case("objectSid") {
        match sid_to_string(bytes) {
            Some(sid) => record.insert("objectSid", sid),
            None => tracing::debug!("Ignoring malformed objectSid"),
        }
    }
}

/// Renders a binary SID in `S-R-I-S-S...` form
///
/// Layout: revision (1 byte), sub-authority count (1 byte), identifier
/// authority (6 bytes, big-endian), then little-endian u32 sub-authorities.
pub fn sid_to_string(bytes: &[u8]) -> Option<String> {
    if bytes.len() < 8 {
        return None;
    }
    let revision = bytes[0];
    let count = usize::from(bytes[1]);
    if bytes.len() != 8 + count * 4 {
        return None;
    }

    let authority = bytes[2..8]
        .iter()
        .fold(0_u64, |acc, b| (acc << 8) | u64::from(*b));

    let mut sid = format!("S-{revision}-{authority}");
    for chunk in bytes[8..].chunks_exact(4) {
        let sub_authority = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        sid.push('-');
        sid.push_str(&sub_authority.to_string());
    }
    Some(sid)
}

/// Adds the friendly properties computed from raw attributes
///
/// A property already present on the record (in any letter case) is kept.
pub fn derive_properties(record: &mut DirectoryRecord, dn: &str) {
    let uac = record
        .get(properties::USER_ACCOUNT_CONTROL)
        .and_then(AttributeValue::as_integer);
    let computed = record
        .get(COMPUTED_ACCOUNT_CONTROL)
        .and_then(AttributeValue::as_integer);

    let mut derived: Vec<(&str, AttributeValue)> = Vec::new();

    if !dn.is_empty() {
        derived.push(("DistinguishedName", dn.into()));
    }
    if let Some(created) = record.get("whenCreated").and_then(AttributeValue::as_timestamp) {
        derived.push((properties::CREATED, created.into()));
    }
    if let Some(modified) = record.get("whenChanged").and_then(AttributeValue::as_timestamp) {
        derived.push(("Modified", modified.into()));
    }
    if let Some(last_logon) = record
        .get(properties::LAST_LOGON_TIMESTAMP)
        .and_then(AttributeValue::as_integer)
        .and_then(filetime_to_datetime)
    {
        derived.push((properties::LAST_LOGON_DATE, last_logon.into()));
    }
    if let Some(middle_name) = record.get_text("middleName") {
        derived.push(("OtherName", middle_name.into()));
    }
    if let Some(uac) = uac {
        derived.push((properties::ENABLED, (uac & UF_ACCOUNTDISABLE == 0).into()));
        derived.push(("PasswordNotRequired", (uac & UF_PASSWD_NOTREQD != 0).into()));
        derived.push(("CannotChangePassword", (uac & UF_PASSWD_CANT_CHANGE != 0).into()));
        derived.push(("PasswordNeverExpires", (uac & UF_DONT_EXPIRE_PASSWD != 0).into()));
    }
    if let Some(computed) = computed {
        derived.push(("LockedOut", (computed & UF_LOCKOUT != 0).into()));
        derived.push(("PasswordExpired", (computed & UF_PASSWORD_EXPIRED != 0).into()));
    }

    for (name, value) in derived {
        if !record.contains(name) {
            record.insert(name, value);
        }
    }
}
