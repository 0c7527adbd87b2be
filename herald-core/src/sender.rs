//! # Notification Senders
//!
//! A sender is the terminal point of the pipeline: it receives a fully owned
//! [`NotificationRequest`] and performs the actual delivery. This is where
//! the single side effect of a run happens.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|request| async move { ... }`
//! 2. **Struct implementation**: `impl Sender for MySender`
//! 3. **Type-erased**: `Arc<dyn DynSender>` inside a registry
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Sender`] uses native `async fn` for static dispatch. Registries hold
//! many different sender types, so they store [`DynSender`] objects instead;
//! every `Sender` is a `DynSender` through a blanket impl.

use crate::{
    error::TransportError,
    request::{NotificationRequest, NotificationResult},
};
use std::{future::Future, pin::Pin};

/// Boxed future returned by [`DynSender::send_dyn`].
pub type SendFuture<'a> =
    Pin<Box<dyn Future<Output = Result<NotificationResult, TransportError>> + Send + 'a>>;

/// Delivers a notification and returns the remote service's response.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot send notifications",
    label = "missing `Sender` implementation",
    note = "Senders must implement `send(NotificationRequest)`."
)]
pub trait Sender: Send + Sync + 'static {
    /// Send one notification.
    fn send(
        &self,
        request: NotificationRequest,
    ) -> impl Future<Output = Result<NotificationResult, TransportError>> + Send;
}

/// Object-safe version of [`Sender`].
pub trait DynSender: Send + Sync + 'static {
    /// Send one notification (dynamic dispatch version).
    fn send_dyn(&self, request: NotificationRequest) -> SendFuture<'_>;
}

// Any Sender is a DynSender.
impl<S: Sender> DynSender for S {
    fn send_dyn(&self, request: NotificationRequest) -> SendFuture<'_> {
        Box::pin(self.send(request))
    }
}

// Blanket impl for closures
impl<F, Fut> Sender for F
where
    F: Fn(NotificationRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<NotificationResult, TransportError>> + Send,
{
    fn send(
        &self,
        request: NotificationRequest,
    ) -> impl Future<Output = Result<NotificationResult, TransportError>> + Send {
        (self)(request)
    }
}
