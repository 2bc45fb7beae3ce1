use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::{
    BatchScanUseCase, ConcurrencyLimiter, ListRepositoriesUseCase, RepositoryDetailUseCase,
    RepositoryHost,
};
use crate::domain::DomainError;
use crate::{GithubHost, GithubIdentity, InMemoryHost};

pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_CONCURRENCY_LIMIT: &str = "CONCURRENCY_LIMIT";
pub const ENV_GITHUB_LOGIN: &str = "GITHUB_LOGIN";
pub const ENV_REPO_LIST: &str = "REPO_LIST";

pub struct ContainerConfig {
    /// Bearer credential. Not required in mock mode.
    pub token: Option<String>,
    /// Global ceiling on in-flight fetches.
    pub concurrency_limit: usize,
    /// Account scoping API paths; resolved via the identity endpoint when
    /// absent.
    pub login: Option<String>,
    /// Statically configured batch-scan targets.
    pub repo_list: Vec<String>,
    /// Serve the built-in fixture instead of talking to GitHub.
    pub mock: bool,
}

impl ContainerConfig {
    /// Read and validate configuration from the environment. Missing or
    /// malformed required settings are fatal here, before any fetch runs.
    pub fn from_env(mock: bool) -> Result<Self, DomainError> {
        let concurrency_limit = parse_limit(std::env::var(ENV_CONCURRENCY_LIMIT).ok())?;
        let token = if mock {
            None
        } else {
            Some(std::env::var(ENV_GITHUB_TOKEN).map_err(|_| {
                DomainError::configuration(format!("{ENV_GITHUB_TOKEN} is not set"))
            })?)
        };
        Ok(Self {
            token,
            concurrency_limit,
            login: std::env::var(ENV_GITHUB_LOGIN).ok(),
            repo_list: parse_repo_list(std::env::var(ENV_REPO_LIST).ok()),
            mock,
        })
    }
}

fn parse_limit(raw: Option<String>) -> Result<usize, DomainError> {
    let raw = raw.ok_or_else(|| {
        DomainError::configuration(format!("{ENV_CONCURRENCY_LIMIT} is not set"))
    })?;
    let limit: usize = raw.trim().parse().map_err(|_| {
        DomainError::configuration(format!(
            "{ENV_CONCURRENCY_LIMIT} must be a positive integer, got '{raw}'"
        ))
    })?;
    if limit == 0 {
        return Err(DomainError::configuration(format!(
            "{ENV_CONCURRENCY_LIMIT} must be positive"
        )));
    }
    Ok(limit)
}

fn parse_repo_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

pub struct Container {
    list_use_case: ListRepositoriesUseCase,
    detail_use_case: RepositoryDetailUseCase,
    batch_use_case: BatchScanUseCase,
    repo_list: Vec<String>,
}

impl Container {
    pub async fn new(config: ContainerConfig) -> Result<Self> {
        let limiter = ConcurrencyLimiter::new(config.concurrency_limit);

        let host: Arc<dyn RepositoryHost> = if config.mock {
            debug!("Using in-memory repository host");
            Arc::new(InMemoryHost::sample())
        } else {
            let token = config
                .token
                .as_deref()
                .ok_or_else(|| DomainError::configuration("GITHUB_TOKEN is required"))?;
            let login = match config.login.clone() {
                Some(login) => login,
                None => {
                    debug!("Resolving account login from token");
                    GithubIdentity::new(token).authenticated_login().await?
                }
            };
            info!(login = %login, "scanning as GitHub account");
            Arc::new(GithubHost::new(token, login))
        };

        Ok(Self {
            list_use_case: ListRepositoriesUseCase::new(host.clone(), limiter.clone()),
            detail_use_case: RepositoryDetailUseCase::new(host.clone(), limiter.clone()),
            batch_use_case: BatchScanUseCase::new(host, limiter),
            repo_list: config.repo_list,
        })
    }

    pub fn list_use_case(&self) -> &ListRepositoriesUseCase {
        &self.list_use_case
    }

    pub fn detail_use_case(&self) -> &RepositoryDetailUseCase {
        &self.detail_use_case
    }

    pub fn batch_use_case(&self) -> &BatchScanUseCase {
        &self.batch_use_case
    }

    pub fn repo_list(&self) -> &[String] {
        &self.repo_list
    }
}
