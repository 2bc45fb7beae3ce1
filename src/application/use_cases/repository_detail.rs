use std::sync::Arc;

use tracing::info;

use crate::application::interfaces::RepositoryHost;
use crate::application::services::{ConcurrencyLimiter, TreeWalker};
use crate::domain::{DomainError, RepositoryDetail};

/// Use case for aggregating one repository's full detail record.
///
/// Metadata, tree walk and webhook fetch run concurrently with no priority
/// between them; the manifest content fetch is sequenced afterwards because
/// it depends on the walk's output. The operation fails atomically: any
/// fetch error fails the whole call and no partial detail is observable.
pub struct RepositoryDetailUseCase {
    host: Arc<dyn RepositoryHost>,
    limiter: ConcurrencyLimiter,
    walker: TreeWalker,
}

impl RepositoryDetailUseCase {
    pub fn new(host: Arc<dyn RepositoryHost>, limiter: ConcurrencyLimiter) -> Self {
        let walker = TreeWalker::new(host.clone(), limiter.clone());
        Self {
            host,
            limiter,
            walker,
        }
    }

    pub async fn execute(&self, repo: &str) -> Result<RepositoryDetail, DomainError> {
        info!(repo, "scanning repository detail");

        let (summary, tree, hooks) = tokio::try_join!(
            self.limiter.admit(self.host.repository_summary(repo)),
            self.walker.walk(repo),
            self.limiter.admit(self.host.list_webhooks(repo)),
        )?;

        let manifest_content = match tree.manifest_path() {
            Some(path) => self.limiter.admit(self.host.blob_content(repo, path)).await?,
            None => String::new(),
        };

        let webhooks = hooks.into_iter().filter(|hook| hook.is_active()).collect();

        Ok(RepositoryDetail::from_parts(
            summary,
            tree.file_count(),
            manifest_content,
            webhooks,
        ))
    }
}
