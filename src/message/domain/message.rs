//! The immutable message value and the capability traits every concrete
//! message type implements.
//!
//! Concrete commands, events and queries wrap a [`Message`] and expose it
//! through [`DomainMessage`]. Types that can be rebuilt from plain data also
//! implement [`ReconstructMessage`], which is what makes them registrable with
//! a [`TypeRegistry`](crate::message::registry::TypeRegistry).

use super::{
    MessageFields, MessageId, MessageKind, MessageName, MessageVersion, Metadata, Payload,
};
use crate::message::error::MessageDataError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A command, event or query.
///
/// # Invariants
///
/// - `uuid` is always a valid UUID
/// - `payload` and `metadata` are always present, possibly empty
/// - `message_name` is fixed at construction and never empty
/// - Messages cannot be modified after creation; the `with_*` methods
///   return new values
///
/// # Examples
///
/// ```
/// use postmark::message::domain::{DomainMessage, Message, MessageKind, MessageName, Payload};
/// use mockable::DefaultClock;
///
/// let name = MessageName::new("app.RegisterUser").expect("valid name");
/// let message = Message::new(name, MessageKind::Command, Payload::new(), &DefaultClock);
///
/// assert_eq!(message.message_name(), "app.RegisterUser");
/// assert_eq!(message.version().value(), 0);
/// assert!(message.metadata().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    message_name: MessageName,
    kind: MessageKind,
    uuid: MessageId,
    version: MessageVersion,
    payload: Payload,
    metadata: Metadata,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a fresh message stamped with the clock's current time.
    ///
    /// The identifier is newly generated, the version is zero and the
    /// metadata is empty.
    #[must_use]
    pub fn new(
        message_name: MessageName,
        kind: MessageKind,
        payload: Payload,
        clock: &impl Clock,
    ) -> Self {
        Self::from_fields(
            message_name,
            kind,
            MessageFields {
                uuid: MessageId::new(),
                version: MessageVersion::INITIAL,
                payload,
                metadata: Metadata::new(),
                created_at: clock.utc(),
            },
        )
    }

    /// Rebuilds a message from a fully populated field set.
    #[must_use]
    pub fn from_fields(message_name: MessageName, kind: MessageKind, fields: MessageFields) -> Self {
        let MessageFields {
            uuid,
            version,
            payload,
            metadata,
            created_at,
        } = fields;
        Self {
            message_name,
            kind,
            uuid,
            version,
            payload,
            metadata,
            created_at,
        }
    }

    /// Returns a copy with the metadata replaced.
    #[must_use]
    pub fn with_metadata(&self, metadata: Metadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }

    /// Returns a copy with one metadata entry added or overwritten.
    #[must_use]
    pub fn with_added_metadata(&self, key: impl Into<String>, value: Value) -> Self {
        let mut copy = self.clone();
        copy.metadata.insert(key.into(), value);
        copy
    }

    /// Returns a copy at a different version.
    #[must_use]
    pub fn with_version(&self, version: MessageVersion) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }

    /// Checks that the payload carries `key`.
    ///
    /// Concrete message types call this from
    /// [`ReconstructMessage::from_message`] to enforce their own payload
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDataError::MissingPayloadKey`] when the key is absent.
    pub fn require_payload_key(&self, key: &str) -> Result<(), MessageDataError> {
        if self.payload.contains_key(key) {
            Ok(())
        } else {
            Err(MessageDataError::MissingPayloadKey(key.to_owned()))
        }
    }

    /// Consumes the message and returns its populated field set.
    #[must_use]
    pub fn into_fields(self) -> MessageFields {
        MessageFields {
            uuid: self.uuid,
            version: self.version,
            payload: self.payload,
            metadata: self.metadata,
            created_at: self.created_at,
        }
    }
}

/// The capability set shared by every message type.
///
/// Implementors only provide [`as_message`](Self::as_message); the accessors
/// read through it.
pub trait DomainMessage: fmt::Debug + Send + Sync {
    /// Returns the underlying message value.
    fn as_message(&self) -> &Message;

    /// Returns the logical message name.
    fn message_name(&self) -> &str {
        self.as_message().message_name.as_str()
    }

    /// Returns whether this is a command, event or query.
    fn message_kind(&self) -> MessageKind {
        self.as_message().kind
    }

    /// Returns the message identifier.
    fn uuid(&self) -> MessageId {
        self.as_message().uuid
    }

    /// Returns the version of the originating entity.
    fn version(&self) -> MessageVersion {
        self.as_message().version
    }

    /// Returns the semantic content.
    fn payload(&self) -> &Payload {
        &self.as_message().payload
    }

    /// Returns the cross-cutting annotations.
    fn metadata(&self) -> &Metadata {
        &self.as_message().metadata
    }

    /// Returns the creation timestamp.
    fn created_at(&self) -> DateTime<Utc> {
        self.as_message().created_at
    }
}

impl DomainMessage for Message {
    fn as_message(&self) -> &Message {
        self
    }
}

/// Reconstruction entry point of a concrete message type.
///
/// The factory hands over a [`Message`] whose name and kind are already bound;
/// implementations wrap it and apply any type-specific checks.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::{DomainMessage, Message, MessageKind, ReconstructMessage};
/// use postmark::message::error::MessageDataError;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct RegisterUser(Message);
///
/// impl DomainMessage for RegisterUser {
///     fn as_message(&self) -> &Message {
///         &self.0
///     }
/// }
///
/// impl ReconstructMessage for RegisterUser {
///     const KIND: MessageKind = MessageKind::Command;
///
///     fn from_message(message: Message) -> Result<Self, MessageDataError> {
///         message.require_payload_key("email")?;
///         Ok(Self(message))
///     }
/// }
/// ```
pub trait ReconstructMessage: DomainMessage + Sized + 'static {
    /// The kind every instance of this type carries.
    const KIND: MessageKind;

    /// Wraps a reconstructed message value.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDataError`] when the message violates the type's own
    /// construction contract.
    fn from_message(message: Message) -> Result<Self, MessageDataError>;
}
