//! Error types for message reconstruction, data assertions and type
//! registration.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use thiserror::Error;

/// Errors returned by a message factory.
///
/// Unknown and invalid type identifiers are distinct variants so callers can
/// tell a configuration mistake from a wiring mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageFactoryError {
    /// The type identifier does not resolve to any known type.
    #[error("unknown message type: {0}")]
    UnknownMessageType(String),

    /// The type identifier resolves to a type that is not a message.
    #[error("type '{type_identifier}' ({type_name}) is not a message type")]
    InvalidMessageType {
        /// The identifier that was looked up.
        type_identifier: String,
        /// The Rust type registered under that identifier.
        type_name: String,
    },

    /// The supplied data was rejected while building the message.
    #[error("invalid message data: {0}")]
    InvalidMessageData(#[from] MessageDataError),
}

impl MessageFactoryError {
    /// Creates an unknown message type error.
    #[must_use]
    pub fn unknown_type(type_identifier: impl Into<String>) -> Self {
        Self::UnknownMessageType(type_identifier.into())
    }

    /// Creates an invalid message type error.
    #[must_use]
    pub fn invalid_type(type_identifier: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::InvalidMessageType {
            type_identifier: type_identifier.into(),
            type_name: type_name.into(),
        }
    }

    /// Returns `true` if the type identifier could not be resolved.
    #[must_use]
    pub const fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownMessageType(_))
    }

    /// Returns `true` if the type identifier resolved to a non-message type.
    #[must_use]
    pub const fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidMessageType { .. })
    }
}

/// Errors raised when message data fails an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageDataError {
    /// The message name is empty or whitespace-only.
    #[error("message name must not be empty")]
    EmptyMessageName,

    /// The UUID string could not be parsed.
    #[error("invalid message uuid '{0}'")]
    InvalidUuid(String),

    /// The UUID is the nil UUID.
    #[error("message uuid must not be nil")]
    NilUuid,

    /// A metadata key is empty.
    #[error("metadata keys must not be empty")]
    EmptyMetadataKey,

    /// A metadata value is an array or an object.
    #[error("metadata value for '{key}' must be a scalar or null")]
    NonScalarMetadata {
        /// The offending metadata key.
        key: String,
    },

    /// The metadata map holds more entries than allowed.
    #[error("metadata has {actual} entries, exceeds limit of {max}")]
    TooManyMetadataEntries {
        /// The maximum allowed number of entries.
        max: usize,
        /// The actual number of entries.
        actual: usize,
    },

    /// A payload key required by the concrete message type is absent.
    #[error("payload is missing required key '{0}'")]
    MissingPayloadKey(String),

    /// Multiple assertions failed.
    #[error("multiple message data errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[MessageDataError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl MessageDataError {
    /// Creates a non-scalar metadata error.
    #[must_use]
    pub fn non_scalar_metadata(key: impl Into<String>) -> Self {
        Self::NonScalarMetadata { key: key.into() }
    }

    /// Combines collected errors into a single error.
    ///
    /// Returns `None` for an empty vector and unwraps a single error rather
    /// than nesting it.
    #[must_use]
    pub fn combine(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Errors that can occur while registering types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The type identifier is empty or whitespace-only.
    #[error("type identifier must not be empty")]
    EmptyTypeIdentifier,

    /// A type is already registered under this identifier.
    #[error("type identifier '{0}' is already registered")]
    DuplicateType(String),
}
