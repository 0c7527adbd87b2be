//! # Intent Parsing
//!
//! An intent parser is the entry point of the pipeline. It interprets a raw
//! transcript and decides whether it contains something to act on.
//!
//! # Responsibilities
//!
//! 1. **Interpretation**: Turn free text into a [`CallDescriptor`].
//! 2. **Gatekeeping**: Return `None` for transcripts with no actionable intent.
//!
//! Parsers are pure: no I/O, no side effects, and the same input always
//! produces an equal output. Whether an absent result is an error or a
//! request for clarification is up to the caller.

use crate::descriptor::CallDescriptor;

/// Interprets transcripts into call descriptors.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntentParser`",
    label = "missing `IntentParser` implementation",
    note = "Parsers must implement `parse(&self, &str) -> Option<CallDescriptor>`."
)]
pub trait IntentParser: Send + Sync + 'static {
    /// Inspect the transcript and optionally produce a descriptor.
    fn parse(&self, transcript: &str) -> Option<CallDescriptor>;
}

// Blanket impl for closures
impl<F> IntentParser for F
where
    F: Fn(&str) -> Option<CallDescriptor> + Send + Sync + 'static,
{
    fn parse(&self, transcript: &str) -> Option<CallDescriptor> {
        (self)(transcript)
    }
}
