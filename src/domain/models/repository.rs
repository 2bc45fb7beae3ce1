use serde::{Deserialize, Serialize};

use super::webhook::WebhookRecord;

/// Repository metadata as reported by the hosting provider.
///
/// Immutable once fetched; produced by a single metadata fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    name: String,
    /// Size in provider-reported units (kilobytes for GitHub).
    size: u64,
    /// Owner login.
    owner: String,
    private: bool,
}

impl RepositorySummary {
    pub fn new(name: String, size: u64, owner: String, private: bool) -> Self {
        Self {
            name,
            size,
            owner,
            private,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn is_private(&self) -> bool {
        self.private
    }
}

/// Full per-repository aggregate: metadata plus file count, manifest content
/// and the active webhooks.
///
/// Merged from four independently-fetched pieces; never partially
/// constructed — if any required fetch fails, no detail is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDetail {
    name: String,
    size: u64,
    owner: String,
    private: bool,
    file_count: u64,
    /// Decoded content of the first manifest file, empty if none was found.
    manifest_content: String,
    /// Active webhooks only, in their original relative order.
    webhooks: Vec<WebhookRecord>,
}

impl RepositoryDetail {
    pub fn from_parts(
        summary: RepositorySummary,
        file_count: u64,
        manifest_content: String,
        webhooks: Vec<WebhookRecord>,
    ) -> Self {
        Self {
            name: summary.name,
            size: summary.size,
            owner: summary.owner,
            private: summary.private,
            file_count,
            manifest_content,
            webhooks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    pub fn file_count(&self) -> u64 {
        self.file_count
    }

    pub fn manifest_content(&self) -> &str {
        &self.manifest_content
    }

    pub fn webhooks(&self) -> &[WebhookRecord] {
        &self.webhooks
    }
}
