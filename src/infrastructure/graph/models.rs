//! Wire models for the trust framework endpoints.

use crate::domain::KeySetKey;
use serde::{Deserialize, Serialize};

/// Collection envelope returned by the keyset listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct KeySetCollection {
    #[serde(default)]
    pub value: Vec<KeySetRecord>,
}

/// A keyset as carried on the wire. The create call posts a record with
/// only the id set and no keys.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeySetRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<KeyRecord>,
}

impl KeySetRecord {
    pub fn empty(id: impl Into<String>) -> Self {
        Self { id: id.into(), keys: Vec::new() }
    }
}

/// One key version as carried on the wire. The platform omits fields it
/// considers not applicable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KeyRecord {
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub kty: Option<String>,
    #[serde(default, rename = "use")]
    pub use_: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub nbf: Option<i64>,
}

impl KeyRecord {
    pub fn into_key(self) -> KeySetKey {
        KeySetKey {
            kid: self.kid.unwrap_or_default(),
            kty: self.kty.unwrap_or_default(),
            use_: self.use_.unwrap_or_default(),
            exp: self.exp,
            nbf: self.nbf,
        }
    }
}

/// Body of the uploadSecret call. No `Debug` derive: `k` is the raw
/// secret.
#[derive(Serialize)]
pub struct UploadSecretBody<'a> {
    #[serde(rename = "use")]
    pub use_: &'a str,
    pub k: &'a str,
    pub nbf: i64,
    pub exp: i64,
}

/// Body of the generateKey call.
#[derive(Debug, Serialize)]
pub struct GenerateKeyBody<'a> {
    #[serde(rename = "use")]
    pub use_: &'a str,
    pub kty: &'a str,
    pub nbf: i64,
    pub exp: i64,
}

/// Token endpoint response; only the access token is consumed.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
}
