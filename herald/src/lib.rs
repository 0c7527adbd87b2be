//! # herald - Transcript-Driven Notifications
//!
//! `herald` turns a conversation transcript into a single notification call.
//! A parser extracts a [`CallDescriptor`], a [`Dispatcher`] resolves it
//! against an immutable [`Registry`], and the registered [`Sender`] posts
//! the notification.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use herald::{Config, KeywordIntentParser, Pipeline, transcript::CONVERSATION};
//!
//! let config = Config::new("https://api.rester.example/notify", herald::config::DEFAULT_TIMEOUT)?;
//! let pipeline = Pipeline::new(KeywordIntentParser::new(), herald::dispatcher(&config)?);
//! let result = pipeline.run(CONVERSATION).await?;
//! ```
//!
//! ## Testing
//!
//! Swap the registry for one built from [`testing`] stubs to observe
//! dispatches without a network.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod config;
pub mod transcript;

pub use config::{Config, ConfigError};
pub use herald_core::{
    BoxError, CallDescriptor, DEFAULT_CHANNEL, DispatchError, DynSender, IntentParser,
    NotificationRequest, NotificationResult, RegistryError, Sender, TransportError,
};
pub use herald_std::{
    Dispatcher, Pipeline, Registry, RegistryBuilder,
    layers::{Logging, SenderExt, Timeout},
    parsers::{KeywordIntentParser, SEND_NOTIFICATION},
    senders::{DEFAULT_API_URL, HttpSender},
};

/// Testing utilities.
pub mod testing {
    pub use herald_std::testing::{FailingSender, RecordingSender};
}

/// Build the production registry: `sendNotification` posting to the
/// configured endpoint, bounded by the configured timeout.
pub fn registry(config: &Config) -> Result<Registry, RegistryError> {
    let sender = HttpSender::new(config.api_url().clone())
        .with_timeout(config.timeout())
        .with_logging(SEND_NOTIFICATION);

    Ok(Registry::builder()
        .register(SEND_NOTIFICATION, sender)?
        .build())
}

/// Build a dispatcher over [`registry`].
pub fn dispatcher(config: &Config) -> Result<Dispatcher, RegistryError> {
    registry(config).map(Dispatcher::new)
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CallDescriptor, DispatchError, Dispatcher, IntentParser, NotificationRequest,
        NotificationResult, Pipeline, Registry, Sender, SenderExt, TransportError,
    };
}
