pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    BatchScanUseCase, ConcurrencyLimiter, ListRepositoriesUseCase, RepositoryDetailUseCase,
    RepositoryHost, TreeWalker, MAX_TREE_DEPTH,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, GithubHost, GithubIdentity, InMemoryHost, Router,
};

pub use domain::{
    DomainError, EntryKind, RepositoryDetail, RepositorySummary, TreeEntry, TreeScanResult,
    WebhookRecord,
};
