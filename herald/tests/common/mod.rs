#![allow(dead_code)]

use herald::{CallDescriptor, Dispatcher, Registry, testing::RecordingSender};

// ============================================================================
// Fixtures
// ============================================================================

pub const EXPECTED_MESSAGE: &str = "Urgent: Meeting at 10 AM tomorrow";

pub fn notification_descriptor() -> CallDescriptor {
    CallDescriptor::new("sendNotification")
        .with_param("recipient", "DevOps")
        .with_param("message", EXPECTED_MESSAGE)
        .with_param("channel", "email")
}

/// A dispatcher whose only function is a recording stub.
pub fn recording_dispatcher() -> (Dispatcher, RecordingSender) {
    let recorder = RecordingSender::new();
    let registry = Registry::builder()
        .register("sendNotification", recorder.clone())
        .unwrap()
        .build();
    (Dispatcher::new(registry), recorder)
}
