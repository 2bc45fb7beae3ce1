pub mod github_host;
pub mod github_identity;
pub mod in_memory_host;

pub use github_host::{GithubHost, GITHUB_API_BASE};
pub use github_identity::GithubIdentity;
pub use in_memory_host::InMemoryHost;
