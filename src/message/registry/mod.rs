//! Registry of type identifiers known to the host.
//!
//! Message types are looked up by name at runtime, so every identifier a
//! factory can resolve is registered here up front. Only types implementing
//! [`ReconstructMessage`] can be registered as messages; other types the host
//! refers to by name are recorded as foreign entries so that resolving them
//! through a factory fails as a non-message type rather than an unknown one.

use crate::message::{
    domain::{DomainMessage, Message, MessageFields, MessageKind, MessageName, ReconstructMessage},
    error::{MessageDataError, RegistryError},
};
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use tracing::debug;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

type ConstructFn = fn(Message) -> Result<Box<dyn DomainMessage>, MessageDataError>;

fn construct_boxed<M: ReconstructMessage>(
    message: Message,
) -> Result<Box<dyn DomainMessage>, MessageDataError> {
    M::from_message(message).map(|built| Box::new(built) as Box<dyn DomainMessage>)
}

/// A registered message type and its reconstruction entry point.
#[derive(Debug, Clone, Copy)]
pub struct MessageTypeEntry {
    type_name: &'static str,
    type_id: TypeId,
    kind: MessageKind,
    construct: ConstructFn,
}

impl MessageTypeEntry {
    fn of<M: ReconstructMessage>() -> Self {
        Self {
            type_name: type_name::<M>(),
            type_id: TypeId::of::<M>(),
            kind: M::KIND,
            construct: construct_boxed::<M>,
        }
    }

    /// Returns the Rust type name of the registered message type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the kind of the registered message type.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns `true` if the registered type is exactly `M`.
    #[must_use]
    pub fn is<M: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<M>()
    }

    /// Builds a message of the registered type.
    ///
    /// # Errors
    ///
    /// Returns the [`MessageDataError`] raised by the type's
    /// [`ReconstructMessage::from_message`].
    pub fn construct(
        &self,
        message_name: MessageName,
        fields: MessageFields,
    ) -> Result<Box<dyn DomainMessage>, MessageDataError> {
        (self.construct)(Message::from_fields(message_name, self.kind, fields))
    }
}

/// What a registered identifier resolves to.
#[derive(Debug, Clone, Copy)]
pub enum TypeEntry {
    /// A message type that can be reconstructed.
    Message(MessageTypeEntry),

    /// A type known by name that is not a message.
    Foreign {
        /// The Rust type name of the foreign type.
        type_name: &'static str,
    },
}

impl TypeEntry {
    /// Returns the Rust type name behind the identifier.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Message(entry) => entry.type_name,
            Self::Foreign { type_name } => *type_name,
        }
    }
}

fn log_registered(type_identifier: &str, entry: TypeEntry) {
    match entry {
        TypeEntry::Message(message) => debug!(
            type_identifier,
            type_name = message.type_name,
            kind = %message.kind,
            "message type registered"
        ),
        TypeEntry::Foreign { type_name } => {
            debug!(type_identifier, type_name, "foreign type registered");
        }
    }
}

/// Registry of type identifiers.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::{DomainMessage, Message, MessageKind, ReconstructMessage};
/// use postmark::message::error::MessageDataError;
/// use postmark::message::registry::TypeRegistry;
///
/// #[derive(Debug)]
/// struct UserRegistered(Message);
///
/// impl DomainMessage for UserRegistered {
///     fn as_message(&self) -> &Message {
///         &self.0
///     }
/// }
///
/// impl ReconstructMessage for UserRegistered {
///     const KIND: MessageKind = MessageKind::Event;
///
///     fn from_message(message: Message) -> Result<Self, MessageDataError> {
///         Ok(Self(message))
///     }
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry
///     .register::<UserRegistered>("app.UserRegistered")
///     .expect("first registration");
/// assert!(registry.is_message_type("app.UserRegistered"));
/// assert_eq!(registry.kind_of("app.UserRegistered"), Some(MessageKind::Event));
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: HashMap<String, TypeEntry>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a message type under an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyTypeIdentifier`] for a blank identifier
    /// and [`RegistryError::DuplicateType`] if the identifier is taken.
    pub fn register<M: ReconstructMessage>(
        &mut self,
        type_identifier: impl Into<String>,
    ) -> RegistryResult<()> {
        self.insert(
            type_identifier.into(),
            TypeEntry::Message(MessageTypeEntry::of::<M>()),
        )
    }

    /// Registers a type the host knows by name that is not a message.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyTypeIdentifier`] for a blank identifier
    /// and [`RegistryError::DuplicateType`] if the identifier is taken.
    pub fn register_foreign<T: 'static>(
        &mut self,
        type_identifier: impl Into<String>,
    ) -> RegistryResult<()> {
        self.insert(
            type_identifier.into(),
            TypeEntry::Foreign {
                type_name: type_name::<T>(),
            },
        )
    }

    /// Chaining form of [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn with_message<M: ReconstructMessage>(
        mut self,
        type_identifier: impl Into<String>,
    ) -> RegistryResult<Self> {
        self.register::<M>(type_identifier)?;
        Ok(self)
    }

    /// Chaining form of [`register_foreign`](Self::register_foreign).
    ///
    /// # Errors
    ///
    /// Same as [`register_foreign`](Self::register_foreign).
    pub fn with_foreign<T: 'static>(
        mut self,
        type_identifier: impl Into<String>,
    ) -> RegistryResult<Self> {
        self.register_foreign::<T>(type_identifier)?;
        Ok(self)
    }

    fn insert(&mut self, type_identifier: String, entry: TypeEntry) -> RegistryResult<()> {
        if type_identifier.trim().is_empty() {
            return Err(RegistryError::EmptyTypeIdentifier);
        }
        if self.entries.contains_key(&type_identifier) {
            return Err(RegistryError::DuplicateType(type_identifier));
        }
        self.entries.insert(type_identifier.clone(), entry);
        log_registered(&type_identifier, entry);
        Ok(())
    }

    /// Resolves an identifier to its entry.
    #[must_use]
    pub fn resolve(&self, type_identifier: &str) -> Option<&TypeEntry> {
        self.entries.get(type_identifier)
    }

    /// Returns `true` if the identifier is registered at all.
    #[must_use]
    pub fn contains(&self, type_identifier: &str) -> bool {
        self.entries.contains_key(type_identifier)
    }

    /// Returns `true` if the identifier names a message type.
    #[must_use]
    pub fn is_message_type(&self, type_identifier: &str) -> bool {
        matches!(self.resolve(type_identifier), Some(TypeEntry::Message(_)))
    }

    /// Returns the kind of the message type behind the identifier, if any.
    #[must_use]
    pub fn kind_of(&self, type_identifier: &str) -> Option<MessageKind> {
        match self.resolve(type_identifier) {
            Some(TypeEntry::Message(entry)) => Some(entry.kind),
            _ => None,
        }
    }

    /// Returns the registered identifiers in no particular order.
    pub fn type_identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of registered identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
