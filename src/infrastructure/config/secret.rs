//! Secret wrapper that prevents accidental logging.

use secrecy::ExposeSecret;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wrapper around a secret string with a redacting `Debug`.
///
/// Serde support is deliberate: the credential record is persisted by
/// the host's storage, which is the system of record for the secret.
#[derive(Clone)]
pub struct SecretString {
    inner: secrecy::SecretString,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self { inner: secrecy::SecretString::new(value.into()) }
    }

    /// Expose the secret for use (explicit, auditable in code review).
    pub fn expose(&self) -> &str {
        self.inner.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl Default for SecretString {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString([REDACTED {} bytes])", self.expose().len())
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_no_leak() {
        let secret = SecretString::new("hunter2-client-secret");
        let debug_str = format!("{:?}", secret);
        assert!(!debug_str.contains("hunter2"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_expose() {
        let secret = SecretString::new("hunter2");
        assert_eq!(secret.expose(), "hunter2");
        assert!(!secret.is_empty());
        assert!(SecretString::default().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let secret = SecretString::new("hunter2");
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"hunter2\"");
        let back: SecretString = serde_json::from_str(&json).unwrap();
        assert_eq!(back.expose(), "hunter2");
    }
}
