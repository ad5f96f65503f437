//! Operation surface consumed by the host dispatch.

use crate::application::requests::{
    CreateKeySetRequest, DeleteKeySetRequest, GenerateKeyRequest, ReadKeySetRequest, UploadSecretRequest,
};
use crate::domain::{DisplayKey, KeySetId, ValidityWindow};
use crate::foundation::Result;
use crate::infrastructure::config::{CredentialStore, CredentialsUpdate, TenantCredentials};
use crate::infrastructure::graph::{ClientProvider, KeyGeneration, LazyClientProvider, SecretUpload};
use crate::infrastructure::storage::ConfigStorage;
use std::sync::Arc;

/// Keyset lifecycle backend.
///
/// Every operation obtains the client from the injected provider as its
/// first remote-facing step; validation happens before that, so naming
/// violations never produce a network call. Mutating operations return
/// no data; success is the absence of an error.
pub struct KeySetBackend {
    credentials: CredentialStore,
    provider: Arc<dyn ClientProvider>,
}

impl KeySetBackend {
    /// Backend with the default lazy client provider over `storage`.
    pub fn new(storage: Arc<dyn ConfigStorage>) -> Self {
        let credentials = CredentialStore::new(storage);
        let provider = Arc::new(LazyClientProvider::new(credentials.clone()));
        Self { credentials, provider }
    }

    /// Backend with an explicitly injected client provider.
    pub fn with_provider(storage: Arc<dyn ConfigStorage>, provider: Arc<dyn ClientProvider>) -> Self {
        Self { credentials: CredentialStore::new(storage), provider }
    }

    /// All keyset identifiers, in the order the platform returned them.
    pub async fn list_keysets(&self) -> Result<Vec<String>> {
        let client = self.provider.get().await?;
        let ids = client.list_keysets().await?;
        Ok(ids.into_iter().map(KeySetId::into_string).collect())
    }

    /// The active key of a keyset, normalized for display.
    ///
    /// No naming validation: callers may probe arbitrary names.
    pub async fn read_keyset(&self, request: ReadKeySetRequest) -> Result<DisplayKey> {
        let client = self.provider.get().await?;
        let id = KeySetId::unchecked(request.id);
        let key = client.get_active_key(&id).await?;
        Ok(DisplayKey::from_key(&key))
    }

    /// Whether the keyset currently yields an active key.
    ///
    /// Used by the host to route create-vs-update at the same path.
    /// Client acquisition failures propagate; any failure of the probe
    /// itself reads as "does not exist" (absent and undeterminable are
    /// conflated here).
    pub async fn keyset_exists(&self, request: ReadKeySetRequest) -> Result<bool> {
        let client = self.provider.get().await?;
        let id = KeySetId::unchecked(request.id);
        match client.get_active_key(&id).await {
            Ok(key) => Ok(!key.kid.is_empty()),
            Err(err) => {
                log::debug!("existence probe failed id={} error={}", id, err);
                Ok(false)
            }
        }
    }

    /// Create an empty keyset.
    pub async fn create_keyset(&self, request: CreateKeySetRequest) -> Result<()> {
        let id = KeySetId::for_mutation(request.id)?;
        let client = self.provider.get().await?;
        client.create_keyset(&id).await
    }

    /// Upload a caller-supplied secret as key material, valid for one
    /// year from now.
    pub async fn upload_secret(&self, request: UploadSecretRequest) -> Result<()> {
        let id = KeySetId::for_mutation(request.id)?;
        let client = self.provider.get().await?;
        let upload = SecretUpload {
            k: request.secret,
            use_: request.use_,
            window: ValidityWindow::one_year_from_now(),
        };
        client.upload_secret(&id, upload).await
    }

    /// Ask the platform to generate key material server-side, valid for
    /// one year from now.
    pub async fn generate_key(&self, request: GenerateKeyRequest) -> Result<()> {
        let id = KeySetId::for_mutation(request.id)?;
        let client = self.provider.get().await?;
        let generation = KeyGeneration {
            use_: request.use_,
            kty: request.kty,
            window: ValidityWindow::one_year_from_now(),
        };
        client.generate_key(&id, generation).await
    }

    pub async fn delete_keyset(&self, request: DeleteKeySetRequest) -> Result<()> {
        let id = KeySetId::for_mutation(request.id)?;
        let client = self.provider.get().await?;
        client.delete_keyset(&id).await
    }

    /// The stored credential record; zero-valued when unconfigured.
    pub async fn read_config(&self) -> Result<TenantCredentials> {
        self.credentials.read().await
    }

    /// Merge a partial credential update onto the stored record.
    ///
    /// The cached client, if already constructed, is deliberately not
    /// invalidated.
    pub async fn write_config(&self, update: CredentialsUpdate) -> Result<()> {
        self.credentials.write(update).await
    }
}
