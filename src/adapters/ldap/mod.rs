//! LDAP (Active Directory) directory provider

pub mod client;
pub mod properties;

pub use client::LdapDirectory;
