//! Key-value persistence supplied by the host.

use crate::foundation::EngineError;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};

/// Host-provided key-value store used to persist the credential record.
///
/// The host is assumed to serialize access; implementations only need
/// `Send + Sync`.
pub trait ConfigStorage: Send + Sync {
    /// Fetch the raw record stored under `key`, if any.
    fn get<'a>(&'a self, key: &'a str) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, EngineError>> + Send + 'a>>;

    /// Store `value` under `key`, replacing any existing record.
    fn put<'a>(&'a self, key: &'a str, value: Vec<u8>) -> Pin<Box<dyn Future<Output = Result<(), EngineError>> + Send + 'a>>;
}

/// In-memory [`ConfigStorage`] for tests and embedded hosts.
pub struct MemoryConfigStorage {
    inner: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryConfigStorage {
    pub fn new() -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())) }
    }

    fn lock_inner(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>, EngineError> {
        self.inner.lock().map_err(|_| EngineError::storage("memory storage lock", "poisoned"))
    }
}

impl Default for MemoryConfigStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStorage for MemoryConfigStorage {
    fn get<'a>(&'a self, key: &'a str) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, EngineError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.lock_inner()?.get(key).cloned()) })
    }

    fn put<'a>(&'a self, key: &'a str, value: Vec<u8>) -> Pin<Box<dyn Future<Output = Result<(), EngineError>> + Send + 'a>> {
        Box::pin(async move {
            self.lock_inner()?.insert(key.to_string(), value);
            Ok(())
        })
    }
}
