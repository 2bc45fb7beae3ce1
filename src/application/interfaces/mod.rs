mod repository_host;

pub use repository_host::*;
