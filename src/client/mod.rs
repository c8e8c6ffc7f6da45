//! The asynchronous client: one task per submitted operation, executed on a
//! caller-owned [`TaskPool`].

mod handler;
mod ops;

use std::sync::Arc;

use crate::api::ComputeApi;
use crate::config::ClientConfig;
use crate::credentials::{Credentials, ProvideCredentials};
use crate::error::Result;
use crate::pool::{TaskHandle, TaskPool};

pub use handler::{CompletionHandler, FnHandler};

/// Asynchronous wrapper over a [`ComputeApi`] implementation.
///
/// Every operation enqueues exactly one task on the pool; the task runs the
/// blocking call and resolves the returned [`TaskHandle`] with its unmodified
/// result. The wrapper adds no retries, no timeouts, and no ordering between
/// operations: concurrent submissions complete in whatever order the pool and
/// the service produce.
pub struct AsyncComputeClient<C: ComputeApi> {
    api: Arc<C>,
    pool: TaskPool,
}

impl<C: ComputeApi> AsyncComputeClient<C> {
    /// Wrap `api` with a default-sized pool (see
    /// [`TaskPool::with_default_size`] for the resource caveat).
    pub fn new(api: C) -> Result<Self> {
        Ok(Self::with_pool(api, TaskPool::with_default_size()?))
    }

    /// Wrap `api`, running its calls on a caller-supplied pool. The pool may
    /// be shared with other clients; shutting this client down shuts the
    /// shared pool down too.
    pub fn with_pool(api: C, pool: TaskPool) -> Self {
        Self {
            api: Arc::new(api),
            pool,
        }
    }

    /// Resolve credentials through `provider`, then let `factory` build the
    /// synchronous client from the configuration and resolved credentials.
    pub fn from_factory<F>(
        config: ClientConfig,
        provider: &dyn ProvideCredentials,
        pool: TaskPool,
        factory: F,
    ) -> Result<Self>
    where
        F: FnOnce(ClientConfig, Credentials) -> Result<C>,
    {
        let credentials = provider.provide()?;
        Ok(Self::with_pool(factory(config, credentials)?, pool))
    }

    /// The pool operations run on. Callers wanting a graceful drain instead
    /// of [`shutdown`](Self::shutdown) can clone it and call
    /// [`TaskPool::join`].
    pub fn pool(&self) -> &TaskPool {
        &self.pool
    }

    /// Hard stop: releases the synchronous client's resources, then shuts the
    /// pool down. Running calls finish; queued calls are abandoned and their
    /// handles resolve `Err(Error::Cancelled)`; later submissions resolve
    /// `Err(Error::PoolClosed)`.
    pub fn shutdown(&self) {
        self.api.shutdown();
        self.pool.shutdown();
    }

    fn submit<Req, Resp, F>(&self, request: Req, op: F) -> TaskHandle<Resp>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        F: FnOnce(&C, &Req) -> Result<Resp> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        self.pool.submit(move || op(api.as_ref(), &request))
    }

    fn submit_with_handler<Req, Resp, F>(
        &self,
        request: Req,
        op: F,
        handler: Arc<dyn CompletionHandler<Req, Resp>>,
    ) -> TaskHandle<Resp>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        F: FnOnce(&C, &Req) -> Result<Resp> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        self.pool.submit(move || {
            let result = op(api.as_ref(), &request);
            // Notify before the oneshot send, so the handler always observes
            // the outcome no later than the handle does.
            match &result {
                Ok(response) => handler.on_success(&request, response),
                Err(error) => handler.on_error(error),
            }
            result
        })
    }
}
