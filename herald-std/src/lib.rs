//! # herald-std
//!
//! Standard implementations for the Herald intent-to-notification pipeline.
//!
//! This crate provides:
//! - **Parsing**: [`KeywordIntentParser`](parsers::KeywordIntentParser)
//! - **Dispatch**: [`Registry`], [`RegistryBuilder`], [`Dispatcher`], [`Pipeline`]
//! - **Senders**: `HttpSender` (feature `http`)
//! - **Layers**: Logging, Timeout (feature `timeout`)
//! - **Testing**: recording and failing stub senders

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use herald_core;

// Modules
pub mod dispatcher;
pub mod layers;
pub mod parsers;
pub mod pipeline;
pub mod registry;
pub mod senders;
pub mod testing;

pub use dispatcher::Dispatcher;
pub use pipeline::Pipeline;
pub use registry::{Registry, RegistryBuilder};
