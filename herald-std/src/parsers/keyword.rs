//! Keyword-based intent parser.

use herald_core::{CallDescriptor, IntentParser};

/// Function name produced on a match.
pub const SEND_NOTIFICATION: &str = "sendNotification";

const TRIGGER: &str = "notify";
const TEAM: &str = "DevOps";
const TEMPLATE: &str = "Urgent: Meeting at {time} tomorrow";
const MEETING_TIME: &str = "10 AM";

/// A placeholder parser that matches two literal tokens.
///
/// A transcript matches when it contains `notify` in any case and `DevOps`
/// exactly as written. This is not language understanding and does not
/// generalize: the recipient, time and channel of the resulting descriptor
/// are fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordIntentParser;

impl KeywordIntentParser {
    /// Create a new keyword parser.
    pub const fn new() -> Self {
        Self
    }

    fn matches(transcript: &str) -> bool {
        transcript.to_lowercase().contains(TRIGGER) && transcript.contains(TEAM)
    }
}

impl IntentParser for KeywordIntentParser {
    fn parse(&self, transcript: &str) -> Option<CallDescriptor> {
        if !Self::matches(transcript) {
            return None;
        }

        Some(
            CallDescriptor::new(SEND_NOTIFICATION)
                .with_param("recipient", TEAM)
                .with_param("message", TEMPLATE.replace("{time}", MEETING_TIME))
                .with_param("channel", herald_core::DEFAULT_CHANNEL),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_is_case_insensitive() {
        let parser = KeywordIntentParser::new();
        assert!(parser.parse("NOTIFY DevOps").is_some());
        assert!(parser.parse("please Notify the DevOps folks").is_some());
    }

    #[test]
    fn test_team_is_case_sensitive() {
        let parser = KeywordIntentParser::new();
        assert_eq!(parser.parse("notify devops"), None);
        assert_eq!(parser.parse("notify DEVOPS"), None);
    }

    #[test]
    fn test_both_tokens_required() {
        let parser = KeywordIntentParser::new();
        assert_eq!(parser.parse("DevOps, at 10 AM."), None);
        assert_eq!(parser.parse("notify the team"), None);
        assert_eq!(parser.parse(""), None);
    }

    #[test]
    fn test_descriptor_contents() {
        let descriptor = KeywordIntentParser::new().parse("notify DevOps").unwrap();
        assert_eq!(descriptor.function_name(), "sendNotification");
        assert_eq!(descriptor.param("recipient"), Some("DevOps"));
        assert_eq!(
            descriptor.param("message"),
            Some("Urgent: Meeting at 10 AM tomorrow")
        );
        assert_eq!(descriptor.param("channel"), Some("email"));
    }
}
