//! Normalized read projection of remote key records.

use crate::domain::keyset::KeySetKey;
use crate::foundation::format_local_timestamp;
use serde::Serialize;

/// Sentinel rendered for absent or non-positive timestamps.
pub const TIMESTAMP_NOT_APPLICABLE: &str = "n/a";

/// Human-readable projection of a [`KeySetKey`], with epoch timestamps
/// rendered in local time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayKey {
    pub kid: String,
    pub kty: String,
    #[serde(rename = "use")]
    pub use_: String,
    pub exp: String,
    pub nbf: String,
}

impl DisplayKey {
    /// Pure projection; performs no validation and cannot fail.
    pub fn from_key(key: &KeySetKey) -> Self {
        Self {
            kid: key.kid.clone(),
            kty: key.kty.clone(),
            use_: key.use_.clone(),
            exp: render_timestamp(key.exp),
            nbf: render_timestamp(key.nbf),
        }
    }
}

fn render_timestamp(epoch_secs: Option<i64>) -> String {
    match epoch_secs {
        Some(secs) if secs > 0 => format_local_timestamp(secs),
        _ => TIMESTAMP_NOT_APPLICABLE.to_string(),
    }
}
