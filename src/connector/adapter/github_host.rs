use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::application::interfaces::RepositoryHost;
use crate::domain::{DomainError, EntryKind, RepositorySummary, TreeEntry, WebhookRecord};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = "hubscan";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct OwnerDto {
    login: String,
}

#[derive(Deserialize)]
struct RepoDto {
    name: String,
    size: u64,
    owner: OwnerDto,
    private: bool,
}

impl RepoDto {
    fn into_summary(self) -> RepositorySummary {
        RepositorySummary::new(self.name, self.size, self.owner.login, self.private)
    }
}

#[derive(Deserialize)]
struct EntryDto {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: EntryKind,
}

#[derive(Deserialize)]
struct BlobDto {
    content: String,
    encoding: String,
}

/// GitHub REST implementation of [`RepositoryHost`].
///
/// Every request carries the same fixed header set (bearer token, JSON
/// accept, API-version pin). No fetch is retried and no pagination is
/// performed; listings are taken as complete in one response.
pub struct GithubHost {
    client: reqwest::Client,
    base_url: String,
    token: String,
    owner: String,
}

impl GithubHost {
    pub fn new(token: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::with_base_url(token, owner, GITHUB_API_BASE)
    }

    /// Point the adapter at a different API root (test servers).
    pub fn with_base_url(
        token: impl Into<String>,
        owner: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            owner: owner.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, DomainError> {
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await
            .map_err(|e| {
                warn!("GithubHost: request to {url} failed: {e}");
                DomainError::remote_fetch(format!("request to {url} failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GithubHost: {url} returned {status}");
            return Err(DomainError::remote_fetch(format!(
                "{url} returned {status}"
            )));
        }

        response.json().await.map_err(|e| {
            warn!("GithubHost: failed to parse response from {url}: {e}");
            DomainError::decode(format!("failed to parse response from {url}: {e}"))
        })
    }

    fn contents_url(&self, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/{repo}/contents/{path}",
            self.base_url, self.owner
        )
    }
}

/// Decode a blob payload according to its `encoding` field. GitHub serves
/// base64 with embedded newlines; anything that is not base64 is taken
/// verbatim.
fn decode_blob(content: String, encoding: &str) -> Result<String, DomainError> {
    if encoding != "base64" {
        return Ok(content);
    }
    let compact: String = content.split_whitespace().collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| DomainError::decode(format!("invalid base64 blob: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DomainError::decode(format!("blob is not UTF-8: {e}")))
}

#[async_trait]
impl RepositoryHost for GithubHost {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, DomainError> {
        let url = format!("{}/users/{}/repos", self.base_url, self.owner);
        let repos: Vec<RepoDto> = self.get_json(url).await?;
        Ok(repos.into_iter().map(RepoDto::into_summary).collect())
    }

    async fn repository_summary(&self, repo: &str) -> Result<RepositorySummary, DomainError> {
        let url = format!("{}/repos/{}/{repo}", self.base_url, self.owner);
        let dto: RepoDto = self.get_json(url).await?;
        Ok(dto.into_summary())
    }

    async fn list_directory(
        &self,
        repo: &str,
        path: &str,
    ) -> Result<Vec<TreeEntry>, DomainError> {
        let entries: Vec<EntryDto> = self.get_json(self.contents_url(repo, path)).await?;
        Ok(entries
            .into_iter()
            .map(|entry| TreeEntry::new(entry.name, entry.path, entry.kind))
            .collect())
    }

    async fn blob_content(&self, repo: &str, path: &str) -> Result<String, DomainError> {
        let blob: BlobDto = self.get_json(self.contents_url(repo, path)).await?;
        decode_blob(blob.content, &blob.encoding)
    }

    async fn list_webhooks(&self, repo: &str) -> Result<Vec<WebhookRecord>, DomainError> {
        let url = format!("{}/repos/{}/{repo}/hooks", self.base_url, self.owner);
        self.get_json(url).await
    }
}
