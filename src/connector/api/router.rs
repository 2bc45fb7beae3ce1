use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{
    BatchScanController, ListRepositoriesController, RepositoryDetailController,
};

pub struct Router<'a> {
    list_controller: ListRepositoriesController<'a>,
    detail_controller: RepositoryDetailController<'a>,
    batch_controller: BatchScanController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            list_controller: ListRepositoriesController::new(container),
            detail_controller: RepositoryDetailController::new(container),
            batch_controller: BatchScanController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::List => self.list_controller.list().await,
            Commands::Detail { repo_name } => self.detail_controller.detail(repo_name).await,
            Commands::Batch => self.batch_controller.batch().await,
        }
    }
}
