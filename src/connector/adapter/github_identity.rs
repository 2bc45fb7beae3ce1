use serde::Deserialize;
use tracing::warn;

use crate::connector::adapter::github_host::GITHUB_API_BASE;
use crate::domain::DomainError;

#[derive(Deserialize)]
struct UserDto {
    login: String,
}

/// Resolves the login of the account behind the configured token.
///
/// Used once at startup when no account is configured explicitly; the
/// resolved login scopes every subsequent API path.
pub struct GithubIdentity {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GithubIdentity {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE)
    }

    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub async fn authenticated_login(&self) -> Result<String, DomainError> {
        let url = format!("{}/user", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .header("User-Agent", "hubscan")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| {
                warn!("GithubIdentity: request failed: {e}");
                DomainError::remote_fetch(format!("identity request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GithubIdentity: {url} returned {status}");
            return Err(DomainError::remote_fetch(format!(
                "identity lookup returned {status}"
            )));
        }

        let user: UserDto = response.json().await.map_err(|e| {
            DomainError::decode(format!("failed to parse identity response: {e}"))
        })?;
        Ok(user.login)
    }
}
