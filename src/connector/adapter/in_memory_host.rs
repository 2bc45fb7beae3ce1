use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::interfaces::RepositoryHost;
use crate::domain::{DomainError, EntryKind, RepositorySummary, TreeEntry, WebhookRecord};

/// Programmable in-memory [`RepositoryHost`].
///
/// Serves fixture data for tests and for `--mock` runs: repositories,
/// directory listings, blobs and webhooks are registered up front, and
/// individual fetches can be made to fail. The host also records the
/// high-water mark of simultaneously in-flight fetches, which is what the
/// concurrency-ceiling assertions observe.
pub struct InMemoryHost {
    repos: Vec<RepositorySummary>,
    listings: HashMap<(String, String), Vec<TreeEntry>>,
    blobs: HashMap<(String, String), String>,
    hooks: HashMap<String, Vec<WebhookRecord>>,
    failing_listings: HashSet<(String, String)>,
    failing_hooks: HashSet<String>,
    fetch_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            repos: Vec::new(),
            listings: HashMap::new(),
            blobs: HashMap::new(),
            hooks: HashMap::new(),
            failing_listings: HashSet::new(),
            failing_hooks: HashSet::new(),
            fetch_delay: Duration::ZERO,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_repository(mut self, summary: RepositorySummary) -> Self {
        self.repos.push(summary);
        self
    }

    pub fn with_listing(mut self, repo: &str, path: &str, entries: Vec<TreeEntry>) -> Self {
        self.listings
            .insert((repo.to_string(), path.to_string()), entries);
        self
    }

    pub fn with_blob(mut self, repo: &str, path: &str, content: &str) -> Self {
        self.blobs
            .insert((repo.to_string(), path.to_string()), content.to_string());
        self
    }

    pub fn with_webhooks(mut self, repo: &str, hooks: Vec<WebhookRecord>) -> Self {
        self.hooks.insert(repo.to_string(), hooks);
        self
    }

    /// Make the listing fetch at `(repo, path)` fail.
    pub fn fail_listing(mut self, repo: &str, path: &str) -> Self {
        self.failing_listings
            .insert((repo.to_string(), path.to_string()));
        self
    }

    /// Make the webhook fetch for `repo` fail.
    pub fn fail_webhooks(mut self, repo: &str) -> Self {
        self.failing_hooks.insert(repo.to_string());
        self
    }

    /// Hold every fetch open for `delay`, forcing overlap so concurrency
    /// can be observed.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Highest number of fetches that were in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Built-in fixture backing `--mock` runs.
    pub fn sample() -> Self {
        Self::new()
            .with_repository(RepositorySummary::new(
                "alpha".to_string(),
                128,
                "mock".to_string(),
                false,
            ))
            .with_repository(RepositorySummary::new(
                "beta".to_string(),
                4,
                "mock".to_string(),
                true,
            ))
            .with_listing(
                "alpha",
                "",
                vec![
                    TreeEntry::new("src", "src", EntryKind::Dir),
                    TreeEntry::new("README.md", "README.md", EntryKind::File),
                    TreeEntry::new("ci.yml", "ci.yml", EntryKind::File),
                ],
            )
            .with_listing(
                "alpha",
                "src",
                vec![
                    TreeEntry::new("main.rs", "src/main.rs", EntryKind::File),
                    TreeEntry::new("lib.rs", "src/lib.rs", EntryKind::File),
                ],
            )
            .with_blob("alpha", "ci.yml", "on: push\njobs: {}\n")
            .with_webhooks(
                "alpha",
                vec![
                    WebhookRecord::new(
                        "Repository".to_string(),
                        1,
                        true,
                        "https://example.com/hooks/1".to_string(),
                    ),
                    WebhookRecord::new(
                        "Repository".to_string(),
                        2,
                        false,
                        "https://example.com/hooks/2".to_string(),
                    ),
                ],
            )
            .with_listing("beta", "", Vec::new())
    }

    async fn observe_fetch(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryHost for InMemoryHost {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, DomainError> {
        self.observe_fetch().await;
        Ok(self.repos.clone())
    }

    async fn repository_summary(&self, repo: &str) -> Result<RepositorySummary, DomainError> {
        self.observe_fetch().await;
        self.repos
            .iter()
            .find(|summary| summary.name() == repo)
            .cloned()
            .ok_or_else(|| DomainError::remote_fetch(format!("unknown repository '{repo}'")))
    }

    async fn list_directory(
        &self,
        repo: &str,
        path: &str,
    ) -> Result<Vec<TreeEntry>, DomainError> {
        self.observe_fetch().await;
        let key = (repo.to_string(), path.to_string());
        if self.failing_listings.contains(&key) {
            return Err(DomainError::remote_fetch(format!(
                "listing '{path}' in '{repo}' failed"
            )));
        }
        self.listings
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::remote_fetch(format!("no listing at '{path}' in '{repo}'")))
    }

    async fn blob_content(&self, repo: &str, path: &str) -> Result<String, DomainError> {
        self.observe_fetch().await;
        self.blobs
            .get(&(repo.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| DomainError::remote_fetch(format!("no blob at '{path}' in '{repo}'")))
    }

    async fn list_webhooks(&self, repo: &str) -> Result<Vec<WebhookRecord>, DomainError> {
        self.observe_fetch().await;
        if self.failing_hooks.contains(repo) {
            return Err(DomainError::remote_fetch(format!(
                "webhook fetch for '{repo}' failed"
            )));
        }
        Ok(self.hooks.get(repo).cloned().unwrap_or_default())
    }
}
