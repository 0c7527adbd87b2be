//! Built-in demonstration transcript.

/// The conversation processed when no transcript is supplied.
pub const CONVERSATION: &str = "
Human: Notify the team about the urgent meeting tomorrow.
Bot: Which team?
Human: DevOps, at 10 AM.
";
