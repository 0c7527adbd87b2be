//! Descriptor dispatch.

use crate::registry::Registry;
use herald_core::{CallDescriptor, DispatchError, NotificationRequest, NotificationResult};

/// Resolves call descriptors against a [`Registry`] and invokes the sender.
///
/// The dispatcher itself has no side effects: the only I/O during a dispatch
/// happens inside the resolved sender, and it happens at most once.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a fixed registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatch a descriptor, returning the sender's result verbatim.
    ///
    /// Fails with [`DispatchError::InvalidIntent`] when there is no
    /// descriptor or its parameters do not form a valid request, and with
    /// [`DispatchError::UnknownFunction`] when the function is not
    /// registered. Neither case reaches a sender.
    pub async fn dispatch(
        &self,
        descriptor: Option<&CallDescriptor>,
    ) -> Result<NotificationResult, DispatchError> {
        let descriptor = descriptor.ok_or_else(DispatchError::no_intent)?;
        let name = descriptor.function_name();

        let sender = match self.registry.route(name) {
            Some(sender) => sender,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(function = %name, "Function not registered");
                return Err(DispatchError::UnknownFunction(name.to_string()));
            }
        };

        let request = NotificationRequest::try_from(descriptor)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(function = %name, recipient = %request.recipient, "Dispatching");

        Ok(sender.send_dyn(request).await?)
    }
}
