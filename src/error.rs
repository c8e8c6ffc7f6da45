use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured fault returned by the Cumulus service when it rejects a request.
///
/// Produced by the synchronous client from the service's error response; this
/// crate carries it through without interpreting it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ServiceFault {
    /// Machine-readable error code, e.g. `InvalidInstanceID.NotFound`.
    pub code: String,

    /// Human-readable description from the service.
    pub message: String,

    /// Request id echoed by the service, when one was assigned.
    pub request_id: Option<String>,
}

impl ServiceFault {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// Local failure before a response was obtained (connection refused, DNS,
    /// credential discovery, ...). Raised by the synchronous client and passed
    /// through unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The service received the request and rejected it. Passed through
    /// unchanged.
    #[error("service fault: {0}")]
    Service(#[from] ServiceFault),

    /// The task was cancelled, or abandoned by a pool shutdown, before its
    /// synchronous call started.
    #[error("task cancelled before it started")]
    Cancelled,

    /// The task pool has been shut down and no longer accepts submissions.
    #[error("task pool is shut down")]
    PoolClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::Service(ServiceFault::new(
            "InvalidVolume.NotFound",
            "The volume 'vol-0af1' does not exist.",
        ));
        assert_eq!(
            error.to_string(),
            "service fault: InvalidVolume.NotFound: The volume 'vol-0af1' does not exist."
        );

        let error = Error::Transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(error.to_string(), "transport error: connection refused");

        let error = Error::Cancelled;
        assert_eq!(error.to_string(), "task cancelled before it started");

        let error = Error::PoolClosed;
        assert_eq!(error.to_string(), "task pool is shut down");
    }

    #[test]
    fn test_fault_request_id() {
        let fault = ServiceFault::new("Throttling", "Rate exceeded").with_request_id("req-1234");
        assert_eq!(fault.request_id.as_deref(), Some("req-1234"));
    }
}
