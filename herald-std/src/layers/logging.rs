//! Logging layer for send observation.

use herald_core::{NotificationRequest, NotificationResult, Sender, TransportError};
#[cfg(feature = "tracing")]
use tracing::Instrument;

/// A layer that instruments each send with a `tracing` span.
///
/// Without the `tracing` feature this is a plain pass-through.
#[derive(Clone)]
pub struct Logging<S> {
    inner: S,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    name: &'static str,
}

impl<S> Logging<S> {
    /// Wrap a sender.
    pub const fn new(inner: S, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// Get a reference to the inner sender.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Sender> Sender for Logging<S> {
    #[cfg(feature = "tracing")]
    async fn send(&self, request: NotificationRequest) -> Result<NotificationResult, TransportError> {
        let span = tracing::info_span!(
            "send",
            sender = %self.name,
            recipient = %request.recipient,
            channel = %request.channel
        );

        async move {
            let result = self.inner.send(request).await;
            match &result {
                Ok(_) => tracing::info!("Notification sent"),
                Err(error) => tracing::error!(%error, "Notification failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    #[cfg(not(feature = "tracing"))]
    async fn send(&self, request: NotificationRequest) -> Result<NotificationResult, TransportError> {
        self.inner.send(request).await
    }
}
