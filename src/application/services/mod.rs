mod limiter;
mod tree_walker;

pub use limiter::*;
pub use tree_walker::*;
