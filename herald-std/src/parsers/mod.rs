//! Standard intent parsers.

mod keyword;

pub use keyword::{KeywordIntentParser, SEND_NOTIFICATION};
