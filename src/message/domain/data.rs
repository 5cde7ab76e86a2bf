//! Plain data carried into and out of messages.
//!
//! [`MessageData`] is the loosely populated bag a message is rebuilt from;
//! [`MessageFields`] is the same data after every default has been applied.

use super::{MessageId, MessageVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Semantic content of a message.
pub type Payload = Map<String, Value>;

/// Transport and cross-cutting annotations attached to a message.
pub type Metadata = Map<String, Value>;

/// Raw field bag a message is reconstructed from.
///
/// Every field is optional. Defaults are filled in by the factory, not here.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::MessageData;
/// use serde_json::json;
///
/// let data = MessageData::new()
///     .with_version(2)
///     .with_payload_entry("command", json!("payload"));
/// assert_eq!(data.version, Some(2));
/// assert!(data.uuid.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageData {
    /// Logical message name, informational when passed to a factory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_name: Option<String>,

    /// String form of the message UUID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Revision of the originating entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    /// Semantic content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,

    /// Cross-cutting annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Creation timestamp, already parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl MessageData {
    /// Creates an empty data bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message name.
    #[must_use]
    pub fn with_message_name(mut self, message_name: impl Into<String>) -> Self {
        self.message_name = Some(message_name.into());
        self
    }

    /// Sets the UUID from its string form.
    #[must_use]
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Sets the version.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Option assignment on an owned self with Drop fields is not const"
    )]
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the whole payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Adds a single payload entry, creating the payload if absent.
    #[must_use]
    pub fn with_payload_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload
            .get_or_insert_with(Payload::new)
            .insert(key.into(), value);
        self
    }

    /// Sets the whole metadata map.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Adds a single metadata entry, creating the map if absent.
    #[must_use]
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value);
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Option assignment on an owned self with Drop fields is not const"
    )]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Fully populated field set handed to a message type's reconstruction entry
/// point.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageFields {
    /// Message identifier.
    pub uuid: MessageId,
    /// Revision of the originating entity.
    pub version: MessageVersion,
    /// Semantic content.
    pub payload: Payload,
    /// Cross-cutting annotations.
    pub metadata: Metadata,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
