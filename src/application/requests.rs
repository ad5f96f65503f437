//! Strongly-typed request payloads, one per operation.
//!
//! The host dispatch supplies field values already type-checked against
//! its declared schema; the serde defaults here mirror that schema.

use crate::domain::{DEFAULT_KEY_TYPE, DEFAULT_KEY_USE};
use crate::infrastructure::config::SecretString;
use serde::Deserialize;

fn default_use() -> String {
    DEFAULT_KEY_USE.to_string()
}

fn default_kty() -> String {
    DEFAULT_KEY_TYPE.to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReadKeySetRequest {
    pub id: String,
}

impl ReadKeySetRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateKeySetRequest {
    pub id: String,
}

impl CreateKeySetRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DeleteKeySetRequest {
    pub id: String,
}

impl DeleteKeySetRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Deserialize)]
pub struct UploadSecretRequest {
    pub id: String,
    pub secret: SecretString,
    #[serde(default = "default_use", rename = "use")]
    pub use_: String,
}

impl UploadSecretRequest {
    pub fn new(id: impl Into<String>, secret: impl Into<SecretString>) -> Self {
        Self { id: id.into(), secret: secret.into(), use_: default_use() }
    }

    pub fn with_use(mut self, use_: impl Into<String>) -> Self {
        self.use_ = use_.into();
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct GenerateKeyRequest {
    pub id: String,
    #[serde(default = "default_use", rename = "use")]
    pub use_: String,
    #[serde(default = "default_kty")]
    pub kty: String,
}

impl GenerateKeyRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), use_: default_use(), kty: default_kty() }
    }

    pub fn with_use(mut self, use_: impl Into<String>) -> Self {
        self.use_ = use_.into();
        self
    }

    pub fn with_kty(mut self, kty: impl Into<String>) -> Self {
        self.kty = kty.into();
        self
    }
}
