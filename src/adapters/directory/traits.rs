//! Directory provider trait

use crate::core::scope::SearchSpec;
use crate::domain::record::DirectoryRecord;
use crate::domain::Result;
use async_trait::async_trait;

/// A source of directory records
///
/// Implementations return every record under `spec.base` within
/// `spec.scope` that matches `spec.filter`, carrying at least the attributes
/// in `spec.attributes`. The returned sequence is finite and fully
/// materialized.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Short human-readable description of the backend, for logs
    fn describe(&self) -> String;

    /// Runs a search
    ///
    /// # Errors
    ///
    /// Returns a directory error if the search base does not exist, the
    /// server rejects the query, or the connection drops.
    async fn search(&self, spec: &SearchSpec) -> Result<Vec<DirectoryRecord>>;

    /// Releases the session
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to close cleanly.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
