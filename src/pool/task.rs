use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use pin_project::pin_project;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::error::{Error, Result};

pub type TaskId = Uuid;

/// A queued unit of work. The closure owns its oneshot sender; dropping a job
/// unexecuted resolves its handle as cancelled.
pub(crate) struct Job {
    pub(crate) id: TaskId,
    pub(crate) queued_at: Instant,
    pub(crate) run: Box<dyn FnOnce() + Send + 'static>,
}

impl Job {
    pub(crate) fn new(run: Box<dyn FnOnce() + Send + 'static>) -> Self {
        Self {
            id: Uuid::new_v4(),
            queued_at: Instant::now(),
            run,
        }
    }
}

/// Handle to a submitted task.
///
/// Resolves to the task's `Result` when awaited. The handle can also be waited
/// on synchronously with [`TaskHandle::wait`], or cancelled with
/// [`TaskHandle::cancel`] while the task is still queued. Cancellation is
/// best-effort: once the task's closure has started it runs to completion.
#[pin_project]
#[derive(Debug)]
pub struct TaskHandle<T> {
    #[pin]
    rx: oneshot::Receiver<Result<T>>,
    cancelled: Arc<AtomicBool>,
    rejected: Option<Error>,
    id: TaskId,
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(id: TaskId, rx: oneshot::Receiver<Result<T>>, cancelled: Arc<AtomicBool>) -> Self {
        Self {
            rx,
            cancelled,
            rejected: None,
            id,
        }
    }

    /// Handle for a submission the pool turned away; resolves immediately with
    /// the rejection error.
    pub(crate) fn rejected(error: Error) -> Self {
        let (_tx, rx) = oneshot::channel();
        Self {
            rx,
            cancelled: Arc::new(AtomicBool::new(true)),
            rejected: Some(error),
            id: Uuid::new_v4(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Request cancellation. Takes effect only if the task has not started;
    /// the handle then resolves `Err(Error::Cancelled)`.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Block the calling thread until the task completes.
    ///
    /// Must not be called from within an async runtime; use `.await` there.
    pub fn wait(self) -> Result<T> {
        if let Some(error) = self.rejected {
            return Err(error);
        }
        match self.rx.blocking_recv() {
            Ok(result) => result,
            // Sender dropped without a result: the job was abandoned.
            Err(_) => Err(Error::Cancelled),
        }
    }
}

impl<T> Future for TaskHandle<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if let Some(error) = this.rejected.take() {
            return Poll::Ready(Err(error));
        }
        match this.rx.poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(Error::Cancelled)),
            Poll::Pending => Poll::Pending,
        }
    }
}
