//! Core types for trust framework keysets.

use crate::foundation::{now_epoch_secs, EngineError, ONE_YEAR_SECS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming convention that scopes mutation to the custom-policy namespace.
pub const MUTATION_ID_PREFIX: &str = "B2C_1A_";

pub const DEFAULT_KEY_USE: &str = "sig";
pub const DEFAULT_KEY_TYPE: &str = "RSA";

/// Stable identifier for a keyset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySetId(String);

impl KeySetId {
    /// Validates an identifier for a mutating operation.
    ///
    /// Mutation is scoped to the `B2C_1A_` namespace; violations are
    /// local validation errors and never reach the remote platform.
    pub fn for_mutation(id: impl Into<String>) -> Result<Self, EngineError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EngineError::validation("ID is required"));
        }
        if !id.starts_with(MUTATION_ID_PREFIX) {
            return Err(EngineError::validation(format!("ID must start with {}", MUTATION_ID_PREFIX)));
        }
        Ok(Self(id))
    }

    /// Wraps an identifier without the naming check. Read and list paths
    /// are permissive so callers can probe arbitrary names.
    pub fn unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for KeySetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One version of key material inside a keyset, as reported by the
/// remote platform. `exp`/`nbf` absent or non-positive means "not
/// applicable".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySetKey {
    pub kid: String,
    pub kty: String,
    #[serde(rename = "use")]
    pub use_: String,
    pub exp: Option<i64>,
    pub nbf: Option<i64>,
}

/// Validity window attached to uploaded and generated key material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidityWindow {
    pub nbf: i64,
    pub exp: i64,
}

impl ValidityWindow {
    /// The default (and only) window: one year starting at call time.
    pub fn one_year_from_now() -> Self {
        let nbf = now_epoch_secs();
        Self { nbf, exp: nbf + ONE_YEAR_SECS }
    }
}
