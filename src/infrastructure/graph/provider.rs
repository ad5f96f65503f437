//! Lazy, process-lifetime client provisioning.

use crate::foundation::Result;
use crate::infrastructure::config::CredentialStore;
use crate::infrastructure::graph::auth::DEFAULT_AUTHORITY_BASE;
use crate::infrastructure::graph::client::{GraphApiClient, TrustFrameworkApi, DEFAULT_GRAPH_BASE};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Capability that hands out the authenticated platform client.
///
/// Injected into the operation surface so tests and alternative hosts
/// can substitute their own client construction.
pub trait ClientProvider: Send + Sync {
    fn get<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Arc<dyn TrustFrameworkApi>>> + Send + 'a>>;
}

/// Builds the client from stored credentials on first use and caches it
/// for the life of the process.
///
/// The credential record is read on the cold path only; a later
/// credential change does not invalidate the cached client. A failed
/// construction leaves the cell empty, so the host can reconfigure and
/// retry the whole operation.
pub struct LazyClientProvider {
    credentials: CredentialStore,
    authority_base: String,
    graph_base: String,
    client: OnceCell<Arc<dyn TrustFrameworkApi>>,
}

impl LazyClientProvider {
    pub fn new(credentials: CredentialStore) -> Self {
        Self::with_endpoints(credentials, DEFAULT_AUTHORITY_BASE, DEFAULT_GRAPH_BASE)
    }

    pub fn with_endpoints(credentials: CredentialStore, authority_base: &str, graph_base: &str) -> Self {
        Self {
            credentials,
            authority_base: authority_base.to_string(),
            graph_base: graph_base.to_string(),
            client: OnceCell::new(),
        }
    }
}

impl ClientProvider for LazyClientProvider {
    fn get<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Arc<dyn TrustFrameworkApi>>> + Send + 'a>> {
        Box::pin(async move {
            self.client
                .get_or_try_init(|| async {
                    log::info!("constructing trust framework client on first use");
                    let record = self.credentials.read().await?;
                    let client =
                        GraphApiClient::connect_with_endpoints(&record, &self.authority_base, &self.graph_base).await?;
                    Ok(Arc::new(client) as Arc<dyn TrustFrameworkApi>)
                })
                .await
                .cloned()
        })
    }
}
