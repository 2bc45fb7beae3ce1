use serde::{Deserialize, Serialize};

/// A webhook configured on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRecord {
    #[serde(rename = "type")]
    hook_type: String,
    id: u64,
    active: bool,
    url: String,
}

impl WebhookRecord {
    pub fn new(hook_type: String, id: u64, active: bool, url: String) -> Self {
        Self {
            hook_type,
            id,
            active,
            url,
        }
    }

    pub fn hook_type(&self) -> &str {
        &self.hook_type
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
