//! The worker pool the async client runs its blocking calls on.
//!
//! A [`TaskPool`] is a fixed set of named OS threads pulling jobs off a shared
//! channel. Each submission yields a [`TaskHandle`] that resolves to the job's
//! result. The pool is an explicit, caller-owned resource: clients accept one
//! at construction, and clones of a pool share intake and shutdown state.

pub mod task;
mod worker;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crossbeam_channel::Sender;
use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::pool::task::Job;
use crate::pool::worker::Worker;

pub use task::{TaskHandle, TaskId};

/// Worker count used by [`TaskPool::with_default_size`].
pub const DEFAULT_WORKERS: usize = 50;

/// A fixed-size pool of worker threads executing submitted tasks.
///
/// Cloning is cheap and produces another handle to the same pool; shutting
/// down any clone shuts down all of them.
#[derive(Clone)]
pub struct TaskPool {
    inner: Arc<PoolInner>,
}

struct PoolInner {
    sender: Mutex<Option<Sender<Job>>>,
    // Shared with every worker thread; set by `shutdown`.
    shutdown: Arc<AtomicBool>,
    workers: Mutex<Vec<Worker>>,
}

impl TaskPool {
    /// Spin up a pool of `workers` threads.
    pub fn new(workers: usize) -> Result<Self> {
        let (sender, receiver) = crossbeam_channel::unbounded::<Job>();
        let shutdown = Arc::new(AtomicBool::new(false));

        let workers = (0..workers.max(1))
            .map(|index| Worker::new(index, receiver.clone(), Arc::clone(&shutdown)))
            .collect::<std::io::Result<Vec<_>>>()?;

        tracing::debug!(workers = workers.len(), "task pool started");

        Ok(Self {
            inner: Arc::new(PoolInner {
                sender: Mutex::new(Some(sender)),
                shutdown,
                workers: Mutex::new(workers),
            }),
        })
    }

    /// Convenience pool of [`DEFAULT_WORKERS`] threads.
    ///
    /// Fifty idle OS threads is a deliberate over-provisioning for bursty API
    /// fan-out; callers with tighter resource budgets should size their own
    /// pool with [`TaskPool::new`] and own its shutdown.
    pub fn with_default_size() -> Result<Self> {
        Self::new(DEFAULT_WORKERS)
    }

    /// Submit a closure for execution, returning a handle to its result.
    ///
    /// If the pool is already shut down the returned handle resolves
    /// immediately with `Err(Error::PoolClosed)`.
    pub fn submit<T, F>(&self, f: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let job = Job::new(Box::new(move || {
            if flag.load(Ordering::Acquire) {
                let _ = tx.send(Err(Error::Cancelled));
                return;
            }
            let _ = tx.send(f());
        }));
        let id = job.id;

        match self.enqueue(job) {
            Ok(()) => TaskHandle::new(id, rx, cancelled),
            Err(error) => TaskHandle::rejected(error),
        }
    }

    fn enqueue(&self, job: Job) -> Result<()> {
        if self.inner.shutdown.load(Ordering::Acquire) {
            return Err(Error::PoolClosed);
        }
        let guard = lock(&self.inner.sender);
        match guard.as_ref() {
            Some(sender) => sender.send(job).map_err(|_| Error::PoolClosed),
            None => Err(Error::PoolClosed),
        }
    }

    pub fn is_shutdown(&self) -> bool {
        self.inner.shutdown.load(Ordering::Acquire)
    }

    /// Hard stop. Further submissions fail with `PoolClosed`; tasks already
    /// running finish, tasks still queued are abandoned (their handles resolve
    /// `Err(Error::Cancelled)`). Blocks until the worker threads exit.
    pub fn shutdown(&self) {
        self.inner.shutdown.store(true, Ordering::Release);
        lock(&self.inner.sender).take();

        let workers = std::mem::take(&mut *lock(&self.inner.workers));
        tracing::debug!(workers = workers.len(), "task pool shutting down");
        for worker in workers {
            worker.join();
        }
    }

    /// Graceful drain: stop intake, run everything already queued, then join
    /// the worker threads.
    pub fn join(self) {
        lock(&self.inner.sender).take();

        let workers = std::mem::take(&mut *lock(&self.inner.workers));
        tracing::debug!(workers = workers.len(), "task pool draining");
        for worker in workers {
            worker.join();
        }
    }
}

// Worker threads never hold these locks across a panic-prone region; a
// poisoned lock still guards coherent state.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_resolves() {
        let pool = TaskPool::new(2).unwrap();
        let handle = pool.submit(|| Ok(21 * 2));
        assert_eq!(handle.await.unwrap(), 42);
        pool.shutdown();
    }

    #[test]
    fn test_blocking_wait() {
        let pool = TaskPool::new(1).unwrap();
        let handle = pool.submit(|| Ok("done".to_string()));
        assert_eq!(handle.wait().unwrap(), "done");
        pool.shutdown();
    }

    #[tokio::test]
    async fn test_submit_after_shutdown_is_rejected() {
        let pool = TaskPool::new(1).unwrap();
        pool.shutdown();
        let handle = pool.submit(|| Ok(()));
        assert!(matches!(handle.await, Err(Error::PoolClosed)));
    }
}
