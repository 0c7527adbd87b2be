//! Typed notification requests and results.

use crate::{descriptor::CallDescriptor, error::DispatchError};
use serde::{Deserialize, Serialize};

/// Channel used when a descriptor does not name one.
pub const DEFAULT_CHANNEL: &str = "email";

/// The opaque JSON payload returned by the remote service.
pub type NotificationResult = serde_json::Value;

const RECIPIENT: &str = "recipient";
const MESSAGE: &str = "message";
const CHANNEL: &str = "channel";

/// A single notification, as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Who receives the notification.
    pub recipient: String,
    /// Notification text.
    pub message: String,
    /// Delivery channel.
    pub channel: String,
}

impl NotificationRequest {
    /// Create a request on the default channel.
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }

    /// Override the delivery channel.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }
}

impl TryFrom<&CallDescriptor> for NotificationRequest {
    type Error = DispatchError;

    fn try_from(descriptor: &CallDescriptor) -> Result<Self, Self::Error> {
        if let Some(unexpected) = descriptor
            .parameters()
            .keys()
            .find(|key| ![RECIPIENT, MESSAGE, CHANNEL].contains(&key.as_str()))
        {
            return Err(DispatchError::InvalidIntent(format!(
                "unexpected parameter `{unexpected}` for {}",
                descriptor.function_name()
            )));
        }

        let required = |name: &str| {
            descriptor.param(name).map(str::to_owned).ok_or_else(|| {
                DispatchError::InvalidIntent(format!(
                    "missing parameter `{name}` for {}",
                    descriptor.function_name()
                ))
            })
        };

        Ok(Self {
            recipient: required(RECIPIENT)?,
            message: required(MESSAGE)?,
            channel: descriptor.param(CHANNEL).unwrap_or(DEFAULT_CHANNEL).to_string(),
        })
    }
}
