//! Directory abstraction layer
//!
//! A trait-based seam over the directory service, so the export pipeline runs
//! unchanged against a live LDAP server or a JSON snapshot.

pub mod factory;
pub mod traits;

pub use factory::create_directory_provider;
pub use traits::DirectoryProvider;
