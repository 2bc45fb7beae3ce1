use std::sync::Arc;

use crate::application::interfaces::RepositoryHost;
use crate::application::services::ConcurrencyLimiter;
use crate::domain::{DomainError, RepositorySummary};

/// Use case for listing every repository of the configured account.
pub struct ListRepositoriesUseCase {
    host: Arc<dyn RepositoryHost>,
    limiter: ConcurrencyLimiter,
}

impl ListRepositoriesUseCase {
    pub fn new(host: Arc<dyn RepositoryHost>, limiter: ConcurrencyLimiter) -> Self {
        Self { host, limiter }
    }

    pub async fn execute(&self) -> Result<Vec<RepositorySummary>, DomainError> {
        self.limiter.admit(self.host.list_repositories()).await
    }
}
