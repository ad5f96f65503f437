//! Trust framework API seam and its HTTP implementation.

use crate::domain::{KeySetId, KeySetKey, ValidityWindow};
use crate::foundation::{EngineError, Result};
use crate::infrastructure::config::{SecretString, TenantCredentials};
use crate::infrastructure::graph::auth;
use crate::infrastructure::graph::models::{GenerateKeyBody, KeySetCollection, KeySetRecord, KeyRecord, UploadSecretBody};
use reqwest::StatusCode;
use std::future::Future;
use std::pin::Pin;

pub const DEFAULT_GRAPH_BASE: &str = "https://graph.microsoft.com/beta";

/// Caller-supplied secret to install as key material.
pub struct SecretUpload {
    pub k: SecretString,
    pub use_: String,
    pub window: ValidityWindow,
}

/// Parameters for server-side key generation.
#[derive(Debug)]
pub struct KeyGeneration {
    pub use_: String,
    pub kty: String,
    pub window: ValidityWindow,
}

/// Remote platform operations on trust framework keysets.
///
/// Each call performs exactly one round trip; no retries. Implemented
/// by [`GraphApiClient`] and by mocks in tests.
pub trait TrustFrameworkApi: Send + Sync {
    /// All keysets, in the order the platform returned them.
    fn list_keysets<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Vec<KeySetId>>> + Send + 'a>>;

    /// The key version the platform currently selects from the keyset.
    fn get_active_key<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<KeySetKey>> + Send + 'a>>;

    /// Create an empty keyset carrying only the id.
    fn create_keyset<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    fn delete_keyset<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    fn upload_secret<'a>(
        &'a self,
        id: &'a KeySetId,
        upload: SecretUpload,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    fn generate_key<'a>(
        &'a self,
        id: &'a KeySetId,
        generation: KeyGeneration,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// HTTP client for the Graph trustFramework endpoints.
///
/// Holds the bearer token acquired at construction for its whole
/// lifetime; the owning provider never refreshes it.
pub struct GraphApiClient {
    http: reqwest::Client,
    graph_base: String,
    bearer_token: String,
}

impl GraphApiClient {
    /// Authenticates against the default public endpoints.
    pub async fn connect(credentials: &TenantCredentials) -> Result<Self> {
        Self::connect_with_endpoints(credentials, auth::DEFAULT_AUTHORITY_BASE, DEFAULT_GRAPH_BASE).await
    }

    /// Authenticates with explicit authority and API base URLs.
    pub async fn connect_with_endpoints(
        credentials: &TenantCredentials,
        authority_base: &str,
        graph_base: &str,
    ) -> Result<Self> {
        let http = reqwest::Client::new();
        let bearer_token = auth::acquire_token(&http, authority_base, credentials).await?;
        log::info!("authenticated to trust framework API tenant_id={}", credentials.tenant_id);
        Ok(Self { http, graph_base: graph_base.trim_end_matches('/').to_string(), bearer_token })
    }

    fn keysets_url(&self) -> String {
        format!("{}/trustFramework/keySets", self.graph_base)
    }

    fn keyset_url(&self, id: &KeySetId, suffix: &str) -> String {
        format!("{}/trustFramework/keySets/{}{}", self.graph_base, id, suffix)
    }

    async fn failure(&self, id: Option<&KeySetId>, response: reqwest::Response) -> EngineError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return EngineError::keyset_not_found(id.as_str());
            }
        }
        let body = response.text().await.unwrap_or_default();
        EngineError::api_failure(status.as_u16(), body)
    }
}

impl TrustFrameworkApi for GraphApiClient {
    fn list_keysets<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Vec<KeySetId>>> + Send + 'a>> {
        Box::pin(async move {
            let response = self.http.get(self.keysets_url()).bearer_auth(&self.bearer_token).send().await?;
            if !response.status().is_success() {
                return Err(self.failure(None, response).await);
            }
            let collection: KeySetCollection = response.json().await?;
            Ok(collection.value.into_iter().map(|record| KeySetId::unchecked(record.id)).collect())
        })
    }

    fn get_active_key<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<KeySetKey>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.keyset_url(id, "/getActiveKey");
            let response = self.http.get(url).bearer_auth(&self.bearer_token).send().await?;
            if !response.status().is_success() {
                return Err(self.failure(Some(id), response).await);
            }
            let record: KeyRecord = response.json().await?;
            Ok(record.into_key())
        })
    }

    fn create_keyset<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let body = KeySetRecord::empty(id.as_str());
            let response = self.http.post(self.keysets_url()).bearer_auth(&self.bearer_token).json(&body).send().await?;
            if !response.status().is_success() {
                return Err(self.failure(None, response).await);
            }
            Ok(())
        })
    }

    fn delete_keyset<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.keyset_url(id, "");
            let response = self.http.delete(url).bearer_auth(&self.bearer_token).send().await?;
            if !response.status().is_success() {
                return Err(self.failure(Some(id), response).await);
            }
            Ok(())
        })
    }

    fn upload_secret<'a>(
        &'a self,
        id: &'a KeySetId,
        upload: SecretUpload,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let body = UploadSecretBody {
                use_: &upload.use_,
                k: upload.k.expose(),
                nbf: upload.window.nbf,
                exp: upload.window.exp,
            };
            let url = self.keyset_url(id, "/uploadSecret");
            let response = self.http.post(url).bearer_auth(&self.bearer_token).json(&body).send().await?;
            if !response.status().is_success() {
                return Err(self.failure(Some(id), response).await);
            }
            Ok(())
        })
    }

    fn generate_key<'a>(
        &'a self,
        id: &'a KeySetId,
        generation: KeyGeneration,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let body = GenerateKeyBody {
                use_: &generation.use_,
                kty: &generation.kty,
                nbf: generation.window.nbf,
                exp: generation.window.exp,
            };
            let url = self.keyset_url(id, "/generateKey");
            let response = self.http.post(url).bearer_auth(&self.bearer_token).json(&body).send().await?;
            if !response.status().is_success() {
                return Err(self.failure(Some(id), response).await);
            }
            Ok(())
        })
    }
}
