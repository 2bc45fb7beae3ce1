mod repository;
mod tree;
mod webhook;

pub use repository::*;
pub use tree::*;
pub use webhook::*;
