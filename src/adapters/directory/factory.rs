//! Directory provider factory
//!
//! Creates the configured directory backend.

use crate::adapters::directory::traits::DirectoryProvider;
use crate::adapters::ldap::LdapDirectory;
use crate::adapters::snapshot::SnapshotDirectory;
use crate::config::schema::{DirectoryConfig, DirectoryTarget};
use crate::domain::{OuExportError, Result};
use std::sync::Arc;

/// Create a directory provider based on the configuration
///
/// For LDAP this opens the connection and performs the bind; for snapshots
/// it reads the whole file.
///
/// # Errors
///
/// Returns a configuration error if the selected backend has no section,
/// or a directory error if the backend cannot be opened
pub async fn create_directory_provider(
    config: &DirectoryConfig,
) -> Result<Arc<dyn DirectoryProvider>> {
    match config.target {
        DirectoryTarget::Ldap => {
            let ldap_config = config.ldap.as_ref().ok_or_else(|| {
                OuExportError::Configuration(
                    "directory.target is 'ldap' but [directory.ldap] is missing".to_string(),
                )
            })?;

            tracing::info!(url = %ldap_config.url, "Creating LDAP directory provider");
            let directory = LdapDirectory::connect(ldap_config).await?;
            Ok(Arc::new(directory) as Arc<dyn DirectoryProvider>)
        }
        DirectoryTarget::Snapshot => {
            let snapshot_config = config.snapshot.as_ref().ok_or_else(|| {
                OuExportError::Configuration(
                    "directory.target is 'snapshot' but [directory.snapshot] is missing"
                        .to_string(),
                )
            })?;

            tracing::info!(path = %snapshot_config.path, "Creating snapshot directory provider");
            let directory = SnapshotDirectory::from_file(&snapshot_config.path)?;
            Ok(Arc::new(directory) as Arc<dyn DirectoryProvider>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SnapshotConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_section_is_configuration_error() {
        let config = DirectoryConfig {
            target: DirectoryTarget::Snapshot,
            ldap: None,
            snapshot: None,
        };
        let err = create_directory_provider(&config).await.err().unwrap();
        assert!(matches!(err, OuExportError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_creates_snapshot_provider() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"SAMAccountName": "jdoe"}]"#).unwrap();
        file.flush().unwrap();

        let config = DirectoryConfig {
            target: DirectoryTarget::Snapshot,
            ldap: None,
            snapshot: Some(SnapshotConfig {
                path: file.path().to_string_lossy().into_owned(),
            }),
        };
        let provider = create_directory_provider(&config).await.unwrap();
        assert!(provider.describe().starts_with("snapshot"));
    }
}
