use std::sync::Arc;

use futures_util::future::{try_join_all, BoxFuture, FutureExt};
use tracing::debug;

use crate::application::interfaces::RepositoryHost;
use crate::application::services::ConcurrencyLimiter;
use crate::domain::{DomainError, EntryKind, TreeScanResult};

/// Hard ceiling on directory nesting. The provider cannot be trusted to
/// serve trees of sane depth, so the walk refuses to descend further and
/// fails instead of recursing unboundedly.
pub const MAX_TREE_DEPTH: usize = 64;

/// Recognized manifest file suffixes, matched case-sensitively. Neither
/// extension is preferred over the other; the first match in traversal
/// order wins.
const MANIFEST_SUFFIXES: [&str; 2] = [".yml", ".yaml"];

fn is_manifest(name: &str) -> bool {
    MANIFEST_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Depth-first walk over a repository's file tree.
///
/// Produces the total leaf-file count and the path of the first manifest
/// file. Every directory listing fetch goes through the shared
/// [`ConcurrencyLimiter`], so one repository's walk competes with every
/// other in-flight operation for the same slot pool.
#[derive(Clone)]
pub struct TreeWalker {
    host: Arc<dyn RepositoryHost>,
    limiter: ConcurrencyLimiter,
}

impl TreeWalker {
    pub fn new(host: Arc<dyn RepositoryHost>, limiter: ConcurrencyLimiter) -> Self {
        Self { host, limiter }
    }

    /// Walk the whole repository starting at its root.
    pub async fn walk(&self, repo: &str) -> Result<TreeScanResult, DomainError> {
        let (file_count, manifest_path) = self.walk_dir(repo, String::new(), 0).await?;
        debug!(
            repo,
            file_count,
            manifest = manifest_path.as_deref().unwrap_or(""),
            "tree walk finished"
        );
        Ok(TreeScanResult::new(file_count, manifest_path))
    }

    /// Walk one directory level.
    ///
    /// The listing's entries are resolved concurrently, but their results
    /// are folded back in listing order, so the reported manifest is always
    /// the earliest one in depth-first traversal order no matter which
    /// branch happened to complete first.
    fn walk_dir<'a>(
        &'a self,
        repo: &'a str,
        path: String,
        depth: usize,
    ) -> BoxFuture<'a, Result<(u64, Option<String>), DomainError>> {
        async move {
            if depth > MAX_TREE_DEPTH {
                return Err(DomainError::DepthExceeded(path));
            }

            let entries = self
                .limiter
                .admit(self.host.list_directory(repo, &path))
                .await?;

            let branches = entries.into_iter().map(|entry| {
                async move {
                    match entry.kind() {
                        EntryKind::Dir => {
                            self.walk_dir(repo, entry.path().to_string(), depth + 1).await
                        }
                        EntryKind::File => {
                            let candidate = is_manifest(entry.name())
                                .then(|| entry.path().to_string());
                            Ok((1, candidate))
                        }
                        // Symlinks and submodules are leaves, never manifests.
                        EntryKind::Other => Ok((1, None)),
                    }
                }
            });
            let results = try_join_all(branches).await?;

            let mut file_count = 0;
            let mut manifest_path = None;
            for (count, candidate) in results {
                file_count += count;
                if manifest_path.is_none() {
                    manifest_path = candidate;
                }
            }
            Ok((file_count, manifest_path))
        }
        .boxed()
    }
}
