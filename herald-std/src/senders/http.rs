//! HTTP sender backed by `reqwest`.

use herald_core::{NotificationRequest, NotificationResult, Sender, TransportError};
use reqwest::{Client, Url};

/// Endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.rester.example/notify";

/// Posts each request as JSON to a fixed endpoint.
///
/// The response body is returned as parsed JSON whatever the HTTP status;
/// only a failed request or an undecodable body is an error. The client sets no timeout of its own; wrap the sender in
/// a [`Timeout`](crate::layers::Timeout) layer to bound it.
#[derive(Debug, Clone)]
pub struct HttpSender {
    client: Client,
    endpoint: Url,
}

impl HttpSender {
    /// Create a sender for the given endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Create a sender that reuses an existing client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// The endpoint notifications are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Sender for HttpSender {
    async fn send(&self, request: NotificationRequest) -> Result<NotificationResult, TransportError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = %self.endpoint, "POST notification");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::Request(Box::new(e)))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = %response.status(), "Notification service replied");

        response
            .json::<NotificationResult>()
            .await
            .map_err(|e| TransportError::Decode(Box::new(e)))
    }
}
