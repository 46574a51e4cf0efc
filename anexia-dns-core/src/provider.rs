//! External-dns style provider facade over a [`ZoneApi`].

use std::future::Future;
use std::sync::Arc;

use anexia_dns_provider::{CloudDnsClient, ZoneApi};
use async_trait::async_trait;

use crate::catalog::ZoneCatalog;
use crate::changeset::ChangeSetBuilder;
use crate::config::ProviderConfig;
use crate::endpoint::Endpoint;
use crate::error::{SyncError, SyncResult};
use crate::lister::RecordLister;
use crate::plan::Changes;
use crate::reconciler::Reconciler;

/// Observed-state listing and delta application, as a planner drives them.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Current records of every zone, as endpoints.
    async fn records(&self) -> SyncResult<Vec<Endpoint>>;

    /// Apply a planner delta. Success only once every change was dispatched.
    async fn apply_changes(&self, changes: &Changes) -> SyncResult<()>;

    /// Planner hook to canonicalize desired endpoints. Passthrough by default.
    async fn adjust_endpoints(&self, endpoints: Vec<Endpoint>) -> SyncResult<Vec<Endpoint>> {
        Ok(endpoints)
    }
}

/// [`Provider`] backed by Anexia CloudDNS.
///
/// Holds no state between calls: every call re-reads zones and records.
pub struct AnexiaProvider {
    api: Arc<dyn ZoneApi>,
    config: ProviderConfig,
}

impl AnexiaProvider {
    /// 使用默认配置创建
    #[must_use]
    pub fn new(api: Arc<dyn ZoneApi>) -> Self {
        Self::with_config(api, ProviderConfig::default())
    }

    #[must_use]
    pub fn with_config(api: Arc<dyn ZoneApi>, config: ProviderConfig) -> Self {
        Self { api, config }
    }

    /// Build a [`CloudDnsClient`] from `ANEXIA_TOKEN` and friends.
    pub fn from_env(config: ProviderConfig) -> SyncResult<Self> {
        let client = CloudDnsClient::from_env()?;
        Ok(Self::with_config(Arc::new(client), config))
    }

    /// Bound `fut` by the configured deadline, if any.
    ///
    /// On expiry the in-flight request is dropped; changes already applied stay applied.
    async fn within_deadline<T>(&self, fut: impl Future<Output = SyncResult<T>>) -> SyncResult<T> {
        match self.config.deadline {
            Some(deadline) => tokio::time::timeout(deadline, fut).await.map_err(|_| {
                log::warn!("Operation exceeded deadline of {deadline:?}");
                SyncError::DeadlineExceeded(deadline)
            })?,
            None => fut.await,
        }
    }
}

#[async_trait]
impl Provider for AnexiaProvider {
    async fn records(&self) -> SyncResult<Vec<Endpoint>> {
        let lister = RecordLister::new(ZoneCatalog::new(self.api.as_ref()), &self.config);
        let endpoints = self.within_deadline(lister.list()).await?;
        log::debug!("Listed {} endpoints", endpoints.len());
        Ok(endpoints)
    }

    async fn apply_changes(&self, changes: &Changes) -> SyncResult<()> {
        if changes.is_empty() {
            log::debug!("No changes to apply");
            return Ok(());
        }

        let entries = ChangeSetBuilder::new(self.config.default_region.clone()).build_all(changes)?;
        log::info!(
            "Applying changes: {} create, {} update, {} delete",
            changes.create.len(),
            changes.update_new.len(),
            changes.delete.len()
        );
        self.within_deadline(Reconciler::new(self.api.as_ref()).apply(entries))
            .await
    }
}
