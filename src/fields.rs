//! Structured fields extracted from one message

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when a message carries no Subject header
pub const NO_SUBJECT: &str = "(No Subject)";

/// Placeholder used when a message carries no From header
pub const UNKNOWN_SENDER: &str = "(Unknown Sender)";

/// Placeholder used when a message carries no To header
pub const UNKNOWN_RECIPIENT: &str = "(Unknown Recipient)";

/// The header fields and chosen body of a single message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFields {
    /// Subject header, or [`NO_SUBJECT`]
    pub subject: String,

    /// From header, or [`UNKNOWN_SENDER`]
    pub from: String,

    /// To header, or [`UNKNOWN_RECIPIENT`]
    pub to: String,

    /// Chosen body text, whitespace-trimmed. Plain text is preferred over
    /// HTML; HTML is kept raw when it is the only representation.
    pub body: String,
}

impl MessageFields {
    /// Join subject, sender, recipient and body into the single string the
    /// normalizer operates on.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{} {} {} {}", self.subject, self.from, self.to, self.body)
    }

    /// Check whether the message had no usable body
    #[must_use]
    pub fn body_is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl fmt::Display for MessageFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (from {})", self.subject, self.from)
    }
}
