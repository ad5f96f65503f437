//! OAuth2 client-credentials exchange against the tenant token endpoint.

use crate::foundation::{EngineError, Result};
use crate::infrastructure::config::TenantCredentials;
use crate::infrastructure::graph::models::TokenResponse;

pub const DEFAULT_AUTHORITY_BASE: &str = "https://login.microsoftonline.com";

/// Default permission scope for the platform's management API.
pub const DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(EngineError::CredentialsIncomplete { missing: field });
    }
    Ok(value)
}

/// Exchanges tenant credentials for a bearer token scoped to
/// [`DEFAULT_SCOPE`]. One shot, no retry.
pub(crate) async fn acquire_token(
    http: &reqwest::Client,
    authority_base: &str,
    credentials: &TenantCredentials,
) -> Result<String> {
    let tenant_id = require(&credentials.tenant_id, "tenant_id")?;
    let client_id = require(&credentials.client_id, "client_id")?;
    if credentials.client_secret.is_empty() {
        return Err(EngineError::CredentialsIncomplete { missing: "client_secret" });
    }

    let token_url = format!("{}/{}/oauth2/v2.0/token", authority_base.trim_end_matches('/'), tenant_id);
    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", client_id),
        ("client_secret", credentials.client_secret.expose()),
        ("scope", DEFAULT_SCOPE),
    ];

    log::debug!("requesting token tenant_id={} client_id={}", tenant_id, client_id);
    let response = http.post(&token_url).form(&form).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(EngineError::authentication_failed(format!("token endpoint status={} body={}", status, body)));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|err| EngineError::authentication_failed(format!("malformed token response: {}", err)))?;
    if token.access_token.is_empty() {
        return Err(EngineError::authentication_failed("token endpoint returned no access_token"));
    }
    Ok(token.access_token)
}
