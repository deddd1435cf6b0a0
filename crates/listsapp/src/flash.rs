//! # Status Messages
//!
//! After every mutation the user sees one line of feedback on the next page: either a
//! success ("The list has been created.") or an error ("List name must be unique!").
//!
//! There is a single slot per session:
//! - Setting a message replaces whatever was pending (last write wins)
//! - Success and error are mutually exclusive
//! - Reading the message for display clears it, so it shows exactly once
//!
//! The slot is [`Flash`], stored on the session next to the lists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The pending-message slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flash(Option<StatusMessage>);

impl Flash {
    pub fn set(&mut self, message: StatusMessage) {
        self.0 = Some(message);
    }

    /// Returns the pending message and clears the slot.
    pub fn take(&mut self) -> Option<StatusMessage> {
        self.0.take()
    }

    pub fn peek(&self) -> Option<&StatusMessage> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_the_slot() {
        let mut flash = Flash::default();
        flash.set(StatusMessage::success("The list has been created."));

        assert_eq!(
            flash.take(),
            Some(StatusMessage::success("The list has been created."))
        );
        assert_eq!(flash.take(), None);
        assert!(flash.is_empty());
    }

    #[test]
    fn last_write_wins() {
        let mut flash = Flash::default();
        flash.set(StatusMessage::error("List name must be unique!"));
        flash.set(StatusMessage::success("The todo was added!"));

        let pending = flash.peek().unwrap();
        assert!(!pending.is_error());
        assert_eq!(pending.to_string(), "The todo was added!");
    }

    #[test]
    fn serializes_as_optional_message() {
        let mut flash = Flash::default();
        assert_eq!(serde_json::to_string(&flash).unwrap(), "null");

        flash.set(StatusMessage::error("nope"));
        assert_eq!(
            serde_json::to_string(&flash).unwrap(),
            r#"{"level":"error","text":"nope"}"#
        );
    }
}
