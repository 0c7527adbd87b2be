//! Testing utilities for Herald.
//!
//! Stub senders that make dispatch behavior observable without a network.
//!
//! - [`RecordingSender`]: records every request and returns a canned result
//! - [`FailingSender`]: always fails with a transport error

use herald_core::{NotificationRequest, NotificationResult, Sender, TransportError};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Sender
// ============================================================================

/// A sender that records all requests it receives.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to a registry.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingSender::new();
/// let registry = Registry::builder()
///     .register("sendNotification", recorder.clone())?
///     .build();
///
/// Dispatcher::new(registry).dispatch(Some(&descriptor)).await?;
/// assert_eq!(recorder.count(), 1);
/// ```
#[derive(Clone)]
pub struct RecordingSender {
    requests: Arc<Mutex<Vec<NotificationRequest>>>,
    result: NotificationResult,
}

impl RecordingSender {
    /// Create a recording sender that returns `{"status": "ok"}`.
    pub fn new() -> Self {
        Self::with_result(serde_json::json!({ "status": "ok" }))
    }

    /// Create a recording sender that returns a specific result.
    pub fn with_result(result: NotificationResult) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<NotificationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the number of recorded requests.
    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for RecordingSender {
    fn default() -> Self {
        Self::new()
    }
}

impl Sender for RecordingSender {
    async fn send(&self, request: NotificationRequest) -> Result<NotificationResult, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.result.clone())
    }
}

// ============================================================================
// Failing Sender
// ============================================================================

/// A sender that fails every request with [`TransportError::Request`].
#[derive(Clone)]
pub struct FailingSender {
    reason: String,
}

impl FailingSender {
    /// Create a failing sender with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Sender for FailingSender {
    async fn send(&self, _request: NotificationRequest) -> Result<NotificationResult, TransportError> {
        Err(TransportError::Request(self.reason.clone().into()))
    }
}
