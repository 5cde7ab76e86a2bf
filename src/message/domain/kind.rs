//! The three kinds of domain message.

use serde::{Deserialize, Serialize};

/// Kind of a domain message.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::MessageKind;
///
/// let kind: MessageKind = "event".parse().expect("known kind");
/// assert_eq!(kind, MessageKind::Event);
/// assert_eq!(kind.as_str(), "event");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A request to change state.
    Command,

    /// A fact that has already happened.
    Event,

    /// A request for information.
    Query,
}

impl MessageKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Event => "event",
            Self::Query => "query",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid message kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMessageKindError(String);

impl std::fmt::Display for ParseMessageKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid message kind: '{}'", self.0)
    }
}

impl std::error::Error for ParseMessageKindError {}

impl TryFrom<&str> for MessageKind {
    type Error = ParseMessageKindError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "command" => Ok(Self::Command),
            "event" => Ok(Self::Event),
            "query" => Ok(Self::Query),
            _ => Err(ParseMessageKindError(s.to_owned())),
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = ParseMessageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
