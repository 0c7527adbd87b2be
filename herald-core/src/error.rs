//! Error types for Herald.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Top-level error for a single dispatch
//! - [`TransportError`] - Errors raised by a [`Sender`](crate::Sender)
//! - [`RegistryError`] - Errors while building a registry
//!
//! None of these are retryable; a dispatch either succeeds or the run ends.

use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while dispatching a call descriptor.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The parser produced no actionable descriptor, or its parameters
    /// could not be turned into a request.
    #[error("invalid intent: {0}")]
    InvalidIntent(String),

    /// The descriptor names a function absent from the registry.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// The sender failed to deliver the notification.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl DispatchError {
    /// Error for a parse attempt that yielded nothing.
    pub fn no_intent() -> Self {
        DispatchError::InvalidIntent("no actionable intent found".to_string())
    }
}

/// Errors that can occur while sending a notification.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(#[source] BoxError),

    /// The response body was not valid JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[source] BoxError),

    /// The send did not finish in time.
    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors that can occur while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A function name was registered twice.
    #[error("function already registered: {0}")]
    AlreadyExists(String),

    /// A function name is empty.
    #[error("function name must not be empty")]
    EmptyName,
}
