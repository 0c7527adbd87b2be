//! Transcript-to-result pipeline.

use crate::dispatcher::Dispatcher;
use herald_core::{CallDescriptor, DispatchError, IntentParser, NotificationResult};

/// A parser connected to a dispatcher.
///
/// Control flow is linear: parse once, dispatch once.
pub struct Pipeline<P> {
    parser: P,
    dispatcher: Dispatcher,
}

impl<P: IntentParser> Pipeline<P> {
    /// Connect a parser to a dispatcher.
    pub fn new(parser: P, dispatcher: Dispatcher) -> Self {
        Self { parser, dispatcher }
    }

    /// Parse a transcript without dispatching.
    pub fn plan(&self, transcript: &str) -> Option<CallDescriptor> {
        let descriptor = self.parser.parse(transcript);

        #[cfg(feature = "tracing")]
        {
            match &descriptor {
                Some(d) => tracing::info!(function = %d.function_name(), "Intent found"),
                None => tracing::info!("No actionable intent"),
            }
        }

        descriptor
    }

    /// Parse a transcript and dispatch the result.
    pub async fn run(&self, transcript: &str) -> Result<NotificationResult, DispatchError> {
        let descriptor = self.plan(transcript);
        self.dispatcher.dispatch(descriptor.as_ref()).await
    }

    /// Get a reference to the dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
