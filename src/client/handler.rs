use std::marker::PhantomData;

use crate::error::Error;

/// Caller-supplied observer for a submitted operation's outcome.
///
/// Exactly one of the two callbacks is invoked, exactly once per submission,
/// from the worker thread that ran the operation and strictly before the
/// operation's [`TaskHandle`](crate::TaskHandle) resolves. Errors reported to
/// [`on_error`](CompletionHandler::on_error) still propagate to the handle;
/// the handler is an additional notification, not a replacement.
pub trait CompletionHandler<Req, Resp>: Send + Sync {
    fn on_success(&self, request: &Req, response: &Resp);

    fn on_error(&self, error: &Error);
}

/// Adapts a pair of closures into a [`CompletionHandler`].
pub struct FnHandler<Req, Resp, S, E>
where
    S: Fn(&Req, &Resp) + Send + Sync,
    E: Fn(&Error) + Send + Sync,
{
    on_success: S,
    on_error: E,
    _req: PhantomData<fn(&Req)>,
    _resp: PhantomData<fn(&Resp)>,
}

impl<Req, Resp, S, E> FnHandler<Req, Resp, S, E>
where
    S: Fn(&Req, &Resp) + Send + Sync,
    E: Fn(&Error) + Send + Sync,
{
    pub fn new(on_success: S, on_error: E) -> Self {
        Self {
            on_success,
            on_error,
            _req: PhantomData,
            _resp: PhantomData,
        }
    }
}

impl<Req, Resp, S, E> CompletionHandler<Req, Resp> for FnHandler<Req, Resp, S, E>
where
    S: Fn(&Req, &Resp) + Send + Sync,
    E: Fn(&Error) + Send + Sync,
{
    fn on_success(&self, request: &Req, response: &Resp) {
        (self.on_success)(request, response)
    }

    fn on_error(&self, error: &Error) {
        (self.on_error)(error)
    }
}
