use async_trait::async_trait;

use crate::domain::{DomainError, RepositorySummary, TreeEntry, WebhookRecord};

/// Read-only access to a repository hosting provider.
///
/// The trait is the seam between the scan orchestration and the concrete
/// provider: the production implementation talks to the GitHub REST API,
/// the in-memory implementation serves fixtures for tests and mock mode.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// All repositories of the configured account.
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, DomainError>;

    /// Metadata for one repository.
    async fn repository_summary(&self, repo: &str) -> Result<RepositorySummary, DomainError>;

    /// Directory listing at `path` (`""` for the repository root), in
    /// provider listing order.
    async fn list_directory(&self, repo: &str, path: &str)
        -> Result<Vec<TreeEntry>, DomainError>;

    /// Decoded text content of the blob at `path`. Transport-level encoding
    /// (base64 vs. plain) is resolved by the implementation.
    async fn blob_content(&self, repo: &str, path: &str) -> Result<String, DomainError>;

    /// All webhooks configured on the repository, active or not.
    async fn list_webhooks(&self, repo: &str) -> Result<Vec<WebhookRecord>, DomainError>;
}
