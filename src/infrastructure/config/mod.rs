//! Tenant credential record and its persistence.

pub mod secret;

pub use secret::SecretString;

use crate::foundation::{EngineError, Result};
use crate::infrastructure::storage::ConfigStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed storage slot for the credential record.
pub const CONFIG_STORAGE_KEY: &str = "config";

/// Tenant identity needed to authenticate against the remote platform.
///
/// All fields default to empty; callers treat empty fields as "not
/// configured", not as errors. Invalid contents surface only when
/// authentication is attempted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TenantCredentials {
    #[serde(default)]
    pub subscription_id: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: SecretString,
}

impl TenantCredentials {
    /// Field-by-field merge; `None` fields in the update are left
    /// untouched.
    pub fn merge(&mut self, update: CredentialsUpdate) {
        if let Some(subscription_id) = update.subscription_id {
            self.subscription_id = subscription_id;
        }
        if let Some(tenant_id) = update.tenant_id {
            self.tenant_id = tenant_id;
        }
        if let Some(client_id) = update.client_id {
            self.client_id = client_id;
        }
        if let Some(client_secret) = update.client_secret {
            self.client_secret = client_secret;
        }
    }
}

/// Partial credential write. Omitted fields mean "leave unchanged".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CredentialsUpdate {
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<SecretString>,
}

/// Reads and writes the credential record in host storage.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn ConfigStorage>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn ConfigStorage>) -> Self {
        Self { storage }
    }

    /// Returns the stored record, or the zero-value record if none exists.
    pub async fn read(&self) -> Result<TenantCredentials> {
        match self.storage.get(CONFIG_STORAGE_KEY).await? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(EngineError::from),
            None => Ok(TenantCredentials::default()),
        }
    }

    /// Merges `update` onto the stored record and persists the result.
    ///
    /// No content validation is performed; bad credentials fail at
    /// authentication time.
    pub async fn write(&self, update: CredentialsUpdate) -> Result<()> {
        let mut record = self.read().await?;
        record.merge(update);
        let bytes = serde_json::to_vec(&record)?;
        self.storage.put(CONFIG_STORAGE_KEY, bytes).await?;
        log::debug!("credential record updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut record = TenantCredentials::default();
        record.merge(CredentialsUpdate {
            tenant_id: Some("T".to_string()),
            client_id: Some("Y".to_string()),
            ..Default::default()
        });
        record.merge(CredentialsUpdate { client_id: Some("X".to_string()), ..Default::default() });

        assert_eq!(record.tenant_id, "T");
        assert_eq!(record.client_id, "X");
        assert_eq!(record.subscription_id, "");
    }

    #[test]
    fn test_record_debug_redacts_secret() {
        let mut record = TenantCredentials::default();
        record.merge(CredentialsUpdate { client_secret: Some("super-secret".into()), ..Default::default() });
        let debug_str = format!("{:?}", record);
        assert!(!debug_str.contains("super-secret"));
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = TenantCredentials {
            subscription_id: "sub".to_string(),
            tenant_id: "tenant".to_string(),
            client_id: "client".to_string(),
            client_secret: "secret".into(),
        };
        let bytes = serde_json::to_vec(&record).unwrap();
        let back: TenantCredentials = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back.tenant_id, "tenant");
        assert_eq!(back.client_secret.expose(), "secret");
    }
}
