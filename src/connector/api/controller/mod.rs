pub mod batch_scan_controller;
pub mod list_repositories_controller;
pub mod repository_detail_controller;

pub use batch_scan_controller::BatchScanController;
pub use list_repositories_controller::ListRepositoriesController;
pub use repository_detail_controller::RepositoryDetailController;
