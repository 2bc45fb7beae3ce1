use anyhow::Result;

use super::super::Container;

pub struct RepositoryDetailController<'a> {
    container: &'a Container,
}

impl<'a> RepositoryDetailController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn detail(&self, repo_name: String) -> Result<String> {
        let detail = self
            .container
            .detail_use_case()
            .execute(&repo_name)
            .await?;

        let visibility = if detail.is_private() {
            "private"
        } else {
            "public"
        };
        let mut output = format!("{} ({})\n", detail.name(), visibility);
        output.push_str(&format!("  Owner: {}\n", detail.owner()));
        output.push_str(&format!("  Size: {} KB\n", detail.size()));
        output.push_str(&format!("  Files: {}\n", detail.file_count()));

        if detail.manifest_content().is_empty() {
            output.push_str("  Manifest: (none)\n");
        } else {
            output.push_str("  Manifest:\n");
            for line in detail.manifest_content().lines() {
                output.push_str(&format!("    {line}\n"));
            }
        }

        if detail.webhooks().is_empty() {
            output.push_str("  Active webhooks: (none)\n");
        } else {
            output.push_str("  Active webhooks:\n");
            for hook in detail.webhooks() {
                output.push_str(&format!(
                    "    #{} {} -> {}\n",
                    hook.id(),
                    hook.hook_type(),
                    hook.url()
                ));
            }
        }
        Ok(output)
    }
}
