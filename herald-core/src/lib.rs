//! # herald-core
//!
//! Core traits and types for the Herald intent-to-notification pipeline.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that plugs custom parsers or senders into Herald without pulling in the
//! HTTP stack of `herald-std`.
//!
//! # Pipeline
//!
//! A run moves through three stages:
//!
//! 1. **Parse** ([`IntentParser`]): a transcript becomes an optional
//!    [`CallDescriptor`].
//! 2. **Dispatch**: the descriptor's function name is resolved against an
//!    immutable registry and its parameters are validated into a typed
//!    [`NotificationRequest`].
//! 3. **Send** ([`Sender`]): the request is delivered and the remote
//!    response comes back as an opaque [`NotificationResult`].
//!
//! # Error Types
//!
//! - [`DispatchError`] - Invalid intent, unknown function, or transport failure
//! - [`TransportError`] - Sender failures
//! - [`RegistryError`] - Registry construction failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod descriptor;
mod error;
mod parser;
mod request;
mod sender;

// Re-exports
pub use descriptor::CallDescriptor;
pub use error::{BoxError, DispatchError, RegistryError, TransportError};
pub use parser::IntentParser;
pub use request::{DEFAULT_CHANNEL, NotificationRequest, NotificationResult};
pub use sender::{DynSender, SendFuture, Sender};
