use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Receiver;

use crate::pool::task::Job;

#[derive(Debug)]
pub(crate) struct Worker {
    handle: JoinHandle<()>,
}

impl Worker {
    pub(crate) fn new(
        index: usize,
        receiver: Receiver<Job>,
        shutdown: Arc<AtomicBool>,
    ) -> std::io::Result<Self> {
        let handle = std::thread::Builder::new()
            .name(format!("cumulus-worker-{index}"))
            .spawn(move || {
                while let Ok(job) = receiver.recv() {
                    // After a hard shutdown, drain the queue without running
                    // anything; dropping a job resolves its handle as cancelled.
                    if shutdown.load(Ordering::Acquire) {
                        tracing::trace!(task = %job.id, "abandoning task queued before shutdown");
                        continue;
                    }
                    tracing::trace!(
                        task = %job.id,
                        queued_ms = job.queued_at.elapsed().as_millis() as u64,
                        "running task"
                    );
                    (job.run)();
                }
            })?;
        Ok(Self { handle })
    }

    pub(crate) fn join(self) {
        if self.handle.join().is_err() {
            tracing::error!("worker thread panicked");
        }
    }
}
