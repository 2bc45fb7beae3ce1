use anyhow::Result;

use crate::domain::RepositorySummary;

use super::super::Container;

pub struct ListRepositoriesController<'a> {
    container: &'a Container,
}

impl<'a> ListRepositoriesController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self) -> Result<String> {
        let repos = self.container.list_use_case().execute().await?;
        Ok(format_summaries(&repos))
    }
}

pub(super) fn format_summaries(repos: &[RepositorySummary]) -> String {
    if repos.is_empty() {
        return "No repositories found.".to_string();
    }

    let mut output = format!("Repositories ({}):\n\n", repos.len());
    for repo in repos {
        let visibility = if repo.is_private() { "private" } else { "public" };
        output.push_str(&format!("  {} ({})\n", repo.name(), visibility));
        output.push_str(&format!(
            "    Owner: {}, Size: {} KB\n",
            repo.owner(),
            repo.size()
        ));
    }
    output
}
