use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

/// Global ceiling on in-flight provider operations.
///
/// Every fetch-issuing code path (batch scan, tree walk, metadata, webhook
/// and blob fetches) shares one instance, so wide and deep fan-out compete
/// for the same pool of slots.
///
/// Admission is FIFO: tokio's semaphore queues waiters fairly, so tasks
/// start in admission order while completion order stays unconstrained.
/// Admission never fails, it only defers; a task, once started, runs to
/// completion.
#[derive(Clone)]
pub struct ConcurrencyLimiter {
    permits: Arc<Semaphore>,
    limit: usize,
}

impl ConcurrencyLimiter {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            permits: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// The configured ceiling N.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Currently free slots. Diagnostic only.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Run `task` once a slot is free.
    ///
    /// The task's output, success or failure, is forwarded unchanged; a
    /// failing task does not affect sibling tasks and its slot frees
    /// immediately for the next queued one.
    pub async fn admit<F>(&self, task: F) -> F::Output
    where
        F: Future,
    {
        // The semaphore is never closed, so acquisition cannot fail.
        let _permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .expect("semaphore closed");

        task.await
    }
}
