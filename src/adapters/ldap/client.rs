//! LDAP directory client
//!
//! Async LDAP session built on `ldap3`: connect (LDAPS or StartTLS),
//! optional simple bind, then paged subtree/one-level searches.

use super::properties::entry_to_record;
use crate::adapters::directory::traits::DirectoryProvider;
use crate::config::schema::LdapConfig;
use crate::core::attributes::AttributeSelection;
use crate::core::scope::{SearchScope, SearchSpec};
use crate::domain::errors::DirectoryError;
use crate::domain::record::DirectoryRecord;
use crate::domain::Result;
use async_trait::async_trait;
use ldap3::adapters::{Adapter, EntriesOnly, PagedResults};
use ldap3::{Ldap, LdapConnAsync, LdapConnSettings, Scope, SearchEntry};
use secrecy::ExposeSecret;
use std::time::Duration;

/// LDAP result code: invalid credentials
const RC_INVALID_CREDENTIALS: u32 = 49;
/// LDAP result code: no such object
const RC_NO_SUCH_OBJECT: u32 = 32;

/// Operational attributes requested alongside `*`
const CONSTRUCTED_ATTRIBUTES: &[&str] = &["canonicalName", "msDS-User-Account-Control-Computed"];

/// Bound LDAP session
pub struct LdapDirectory {
    ldap: Ldap,
    url: String,
    page_size: i32,
    timeout: Duration,
}

impl LdapDirectory {
    /// Connects to the server and performs the configured bind
    ///
    /// Without `bind_dn` the session stays anonymous.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the server cannot be reached,
    /// `AuthenticationFailed` for rejected credentials and `BindFailed` for
    /// any other non-success bind result.
    pub async fn connect(config: &LdapConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);

        tracing::debug!(url = %config.url, starttls = config.starttls, "Connecting to LDAP server");

        let settings = LdapConnSettings::new()
            .set_conn_timeout(timeout)
            .set_starttls(config.starttls)
            .set_no_tls_verify(!config.tls_verify);

        let (conn, mut ldap) = LdapConnAsync::with_settings(settings, &config.url)
            .await
            .map_err(|e| {
                DirectoryError::ConnectionFailed(format!(
                    "Failed to connect to LDAP server at {}: {}",
                    config.url, e
                ))
            })?;

        // Spawn the connection driver
        tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                tracing::warn!(error = %e, "LDAP connection driver error");
            }
        });

        if let Some(bind_dn) = &config.bind_dn {
            let password = config
                .bind_password
                .as_ref()
                .map(|p| p.expose_secret().as_ref().to_string())
                .unwrap_or_default();

            tracing::debug!(bind_dn = %bind_dn, "Performing LDAP bind");

            let result = ldap
                .with_timeout(timeout)
                .simple_bind(bind_dn, &password)
                .await
                .map_err(|e| {
                    DirectoryError::ConnectionFailed(format!("LDAP bind failed for {bind_dn}: {e}"))
                })?;

            if result.rc == RC_INVALID_CREDENTIALS {
                return Err(DirectoryError::AuthenticationFailed(bind_dn.clone()).into());
            }
            if result.rc != 0 {
                return Err(DirectoryError::BindFailed {
                    code: result.rc,
                    message: result.text,
                }
                .into());
            }
        } else {
            tracing::debug!("No bind DN configured, using anonymous session");
        }

        tracing::info!(url = %config.url, "LDAP connection established");

        Ok(Self {
            ldap,
            url: config.url.clone(),
            page_size: config.page_size,
            timeout,
        })
    }

    fn requested_attributes(selection: &AttributeSelection) -> Vec<String> {
        let mut attrs: Vec<String> = match selection {
            AttributeSelection::Wildcard => vec!["*".to_string()],
            AttributeSelection::Columns(columns) => columns.clone(),
        };
        attrs.extend(CONSTRUCTED_ATTRIBUTES.iter().map(|a| a.to_string()));
        attrs
    }
}

fn ldap_scope(scope: SearchScope) -> Scope {
    match scope {
        SearchScope::OneLevel => Scope::OneLevel,
        SearchScope::Subtree => Scope::Subtree,
    }
}

#[async_trait]
impl DirectoryProvider for LdapDirectory {
    fn describe(&self) -> String {
        format!("ldap ({})", self.url)
    }

    async fn search(&self, spec: &SearchSpec) -> Result<Vec<DirectoryRecord>> {
        let filter = spec.filter.to_ldap_filter();
        let attrs = Self::requested_attributes(&spec.attributes);

        tracing::debug!(
            base = %spec.base,
            scope = %spec.scope,
            filter = %filter,
            page_size = self.page_size,
            "Running paged LDAP search"
        );

        let mut ldap = self.ldap.clone();
        let adapters: Vec<Box<dyn Adapter<_, _>>> = vec![
            Box::new(EntriesOnly::new()),
            Box::new(PagedResults::new(self.page_size)),
        ];
        let mut stream = ldap
            .with_timeout(self.timeout)
            .streaming_search_with(adapters, &spec.base, ldap_scope(spec.scope), &filter, attrs)
            .await
            .map_err(|e| DirectoryError::SearchFailed(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(entry) = stream
            .next()
            .await
            .map_err(|e| DirectoryError::SearchFailed(e.to_string()))?
        {
            records.push(entry_to_record(SearchEntry::construct(entry)));
        }

        let result = stream.finish().await;
        if result.rc == RC_NO_SUCH_OBJECT {
            return Err(DirectoryError::InvalidSearchBase(spec.base.clone()).into());
        }
        result
            .success()
            .map_err(|e| DirectoryError::SearchFailed(e.to_string()))?;

        tracing::info!(count = records.len(), base = %spec.base, "LDAP search completed");
        Ok(records)
    }

    async fn close(&self) -> Result<()> {
        let mut ldap = self.ldap.clone();
        if let Err(e) = ldap.unbind().await {
            tracing::warn!(error = %e, "Error during LDAP unbind");
        }
        Ok(())
    }
}
