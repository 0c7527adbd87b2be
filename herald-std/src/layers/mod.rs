//! Sender wrappers.
//!
//! Layers wrap a [`Sender`] and are senders themselves, so they compose:
//!
//! ```rust,ignore
//! let sender = HttpSender::new(url)?
//!     .with_timeout(Duration::from_secs(10))
//!     .with_logging("sendNotification");
//! ```

mod logging;
#[cfg(feature = "timeout")]
mod timeout;

pub use logging::Logging;
#[cfg(feature = "timeout")]
pub use timeout::Timeout;

use herald_core::Sender;

/// Combinators for wrapping senders in layers.
pub trait SenderExt: Sender + Sized {
    /// Log every send under the given name.
    fn with_logging(self, name: &'static str) -> Logging<Self> {
        Logging::new(self, name)
    }

    /// Fail sends that take longer than `duration`.
    #[cfg(feature = "timeout")]
    fn with_timeout(self, duration: std::time::Duration) -> Timeout<Self> {
        Timeout::new(self, duration)
    }
}

impl<S: Sender> SenderExt for S {}
