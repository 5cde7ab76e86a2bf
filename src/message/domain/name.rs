//! Logical message names.

use crate::message::error::MessageDataError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a message's logical type.
///
/// By convention this is the fully-qualified name the type was registered
/// under, but it is otherwise treated as an opaque, non-empty string.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::MessageName;
///
/// let name = MessageName::new("app.DoSomething").expect("non-empty name");
/// assert_eq!(name.as_str(), "app.DoSomething");
/// assert!(MessageName::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageName(String);

impl MessageName {
    /// Creates a message name.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDataError::EmptyMessageName`] when the name is empty
    /// or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, MessageDataError> {
        let value = name.into();
        if value.trim().is_empty() {
            return Err(MessageDataError::EmptyMessageName);
        }
        Ok(Self(value))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageName {
    type Error = MessageDataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageName> for String {
    fn from(name: MessageName) -> Self {
        name.0
    }
}

impl AsRef<str> for MessageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
