use anyhow::Result;

use crate::domain::DomainError;

use super::super::Container;
use super::list_repositories_controller::format_summaries;

pub struct BatchScanController<'a> {
    container: &'a Container,
}

impl<'a> BatchScanController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn batch(&self) -> Result<String> {
        let repos = self.container.repo_list();
        if repos.is_empty() {
            return Err(DomainError::invalid_input(
                "no repositories configured; set REPO_LIST to a comma-separated list",
            )
            .into());
        }

        let summaries = self.container.batch_use_case().execute(repos).await?;
        Ok(format_summaries(&summaries))
    }
}
