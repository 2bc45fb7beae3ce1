mod batch_scan;
mod list_repositories;
mod repository_detail;

pub use batch_scan::*;
pub use list_repositories::*;
pub use repository_detail::*;
