//! Timeout layer for time-limited sends.

use herald_core::{NotificationRequest, NotificationResult, Sender, TransportError};
use std::time::Duration;
use tokio::time::timeout;

/// A layer that fails a send with [`TransportError::Timeout`] once
/// `duration` has elapsed.
///
/// Requires a tokio runtime with the time driver enabled.
#[derive(Clone)]
pub struct Timeout<S> {
    inner: S,
    duration: Duration,
}

impl<S> Timeout<S> {
    /// Wrap a sender with a timeout.
    pub fn new(inner: S, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// Create a `Timeout` with the duration specified in milliseconds.
    pub fn millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Get the configured timeout duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<S: Sender> Sender for Timeout<S> {
    async fn send(&self, request: NotificationRequest) -> Result<NotificationResult, TransportError> {
        match timeout(self.duration, self.inner.send(request)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(self.duration)),
        }
    }
}
