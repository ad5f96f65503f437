//! Counting mock of the remote platform and a static client provider.

use b2c_keyset_engine::application::KeySetBackend;
use b2c_keyset_engine::domain::{KeySetId, KeySetKey};
use b2c_keyset_engine::foundation::{EngineError, Result};
use b2c_keyset_engine::infrastructure::graph::{ClientProvider, KeyGeneration, SecretUpload, TrustFrameworkApi};
use b2c_keyset_engine::infrastructure::storage::MemoryConfigStorage;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Debug)]
pub struct RecordedUpload {
    pub id: String,
    pub k: String,
    pub use_: String,
    pub nbf: i64,
    pub exp: i64,
}

#[derive(Clone, Debug)]
pub struct RecordedGeneration {
    pub id: String,
    pub use_: String,
    pub kty: String,
    pub nbf: i64,
    pub exp: i64,
}

#[derive(Default)]
pub struct MockState {
    pub keysets: Vec<String>,
    pub active_keys: HashMap<String, KeySetKey>,
    /// When set, every active-key probe fails with a transport error.
    pub probe_failure: Option<String>,
    pub created: Vec<String>,
    pub deleted: Vec<String>,
    pub uploads: Vec<RecordedUpload>,
    pub generations: Vec<RecordedGeneration>,
    pub call_count: usize,
}

/// In-memory stand-in for the remote platform that records every call.
#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }

    pub fn with_keysets(self: Arc<Self>, ids: &[&str]) -> Arc<Self> {
        self.state().keysets = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_active_key(self: Arc<Self>, id: &str, key: KeySetKey) -> Arc<Self> {
        self.state().active_keys.insert(id.to_string(), key);
        self
    }

    pub fn with_probe_failure(self: Arc<Self>, details: &str) -> Arc<Self> {
        self.state().probe_failure = Some(details.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.state().call_count
    }
}

impl TrustFrameworkApi for MockApi {
    fn list_keysets<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Vec<KeySetId>>> + Send + 'a>> {
        Box::pin(async move {
            let mut state = self.state();
            state.call_count += 1;
            Ok(state.keysets.iter().map(KeySetId::unchecked).collect())
        })
    }

    fn get_active_key<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<KeySetKey>> + Send + 'a>> {
        Box::pin(async move {
            let mut state = self.state();
            state.call_count += 1;
            if let Some(details) = &state.probe_failure {
                return Err(EngineError::Transport { details: details.clone() });
            }
            match state.active_keys.get(id.as_str()) {
                Some(key) => Ok(key.clone()),
                None => Err(EngineError::keyset_not_found(id.as_str())),
            }
        })
    }

    fn create_keyset<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut state = self.state();
            state.call_count += 1;
            state.created.push(id.as_str().to_string());
            Ok(())
        })
    }

    fn delete_keyset<'a>(&'a self, id: &'a KeySetId) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut state = self.state();
            state.call_count += 1;
            state.deleted.push(id.as_str().to_string());
            Ok(())
        })
    }

    fn upload_secret<'a>(
        &'a self,
        id: &'a KeySetId,
        upload: SecretUpload,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut state = self.state();
            state.call_count += 1;
            state.uploads.push(RecordedUpload {
                id: id.as_str().to_string(),
                k: upload.k.expose().to_string(),
                use_: upload.use_,
                nbf: upload.window.nbf,
                exp: upload.window.exp,
            });
            Ok(())
        })
    }

    fn generate_key<'a>(
        &'a self,
        id: &'a KeySetId,
        generation: KeyGeneration,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut state = self.state();
            state.call_count += 1;
            state.generations.push(RecordedGeneration {
                id: id.as_str().to_string(),
                use_: generation.use_,
                kty: generation.kty,
                nbf: generation.window.nbf,
                exp: generation.window.exp,
            });
            Ok(())
        })
    }
}

/// Provider that hands out the mock API and counts how often it is asked.
pub struct StaticProvider {
    api: Arc<MockApi>,
    failure: Option<String>,
    invocations: AtomicUsize,
}

impl StaticProvider {
    pub fn new(api: Arc<MockApi>) -> Arc<Self> {
        Arc::new(Self { api, failure: None, invocations: AtomicUsize::new(0) })
    }

    pub fn failing(api: Arc<MockApi>, details: &str) -> Arc<Self> {
        Arc::new(Self { api, failure: Some(details.to_string()), invocations: AtomicUsize::new(0) })
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl ClientProvider for StaticProvider {
    fn get<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Arc<dyn TrustFrameworkApi>>> + Send + 'a>> {
        Box::pin(async move {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            if let Some(details) = &self.failure {
                return Err(EngineError::authentication_failed(details.clone()));
            }
            Ok(self.api.clone() as Arc<dyn TrustFrameworkApi>)
        })
    }
}

pub fn backend_with(api: Arc<MockApi>) -> (KeySetBackend, Arc<StaticProvider>) {
    let provider = StaticProvider::new(api);
    let backend = KeySetBackend::with_provider(Arc::new(MemoryConfigStorage::new()), provider.clone());
    (backend, provider)
}

pub fn sample_key(kid: &str, exp: Option<i64>, nbf: Option<i64>) -> KeySetKey {
    KeySetKey { kid: kid.to_string(), kty: "RSA".to_string(), use_: "sig".to_string(), exp, nbf }
}
