use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::info;

use crate::application::interfaces::RepositoryHost;
use crate::application::services::ConcurrencyLimiter;
use crate::domain::{DomainError, RepositorySummary};

/// Use case for scanning a fixed list of repositories, metadata only.
///
/// The list is partitioned into consecutive windows of the concurrency
/// ceiling's size. Window members are fetched concurrently; windows run
/// strictly one after another, so each is gated by its slowest member.
/// Output order matches input order exactly, and any member failure fails
/// the whole batch.
pub struct BatchScanUseCase {
    host: Arc<dyn RepositoryHost>,
    limiter: ConcurrencyLimiter,
}

impl BatchScanUseCase {
    pub fn new(host: Arc<dyn RepositoryHost>, limiter: ConcurrencyLimiter) -> Self {
        Self { host, limiter }
    }

    pub async fn execute(&self, repos: &[String]) -> Result<Vec<RepositorySummary>, DomainError> {
        let window_size = self.limiter.limit();
        info!(count = repos.len(), window_size, "batch scan started");

        let mut summaries = Vec::with_capacity(repos.len());
        for window in repos.chunks(window_size) {
            let fetches = window
                .iter()
                .map(|repo| self.limiter.admit(self.host.repository_summary(repo)));
            summaries.extend(try_join_all(fetches).await?);
        }
        Ok(summaries)
    }
}
