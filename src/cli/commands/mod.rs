//! CLI command implementations
//!
//! Each command returns its process exit code:
//! 0 success, 2 configuration or argument error, 4 directory connection
//! error, 5 fatal error.

pub mod export;
pub mod init;
pub mod validate;

/// Exit code: success
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code: configuration or argument error
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code: directory connection error
pub const EXIT_CONNECTION_ERROR: i32 = 4;
/// Exit code: fatal error
pub const EXIT_FATAL: i32 = 5;
