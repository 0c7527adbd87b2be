//! Concrete senders.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{DEFAULT_API_URL, HttpSender};
