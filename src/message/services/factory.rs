//! Registry-backed message factory.

use crate::message::{
    domain::{
        DomainMessage, Message, MessageData, MessageFields, MessageId, MessageName,
        MessageVersion, ReconstructMessage,
    },
    error::MessageFactoryError,
    ports::{
        factory::{FactoryResult, MessageFactory},
        validator::{MessageDataValidator, ValidationConfig},
    },
    registry::{MessageTypeEntry, TypeEntry, TypeRegistry},
    validation::{DefaultMessageDataValidator, rules},
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// Message factory resolving type identifiers through a [`TypeRegistry`].
///
/// The registry and clock are shared read-only, so one factory can serve any
/// number of concurrent callers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use postmark::message::domain::{
///     DomainMessage, Message, MessageData, MessageKind, ReconstructMessage,
/// };
/// use postmark::message::error::MessageDataError;
/// use postmark::message::ports::MessageFactory;
/// use postmark::message::registry::TypeRegistry;
/// use postmark::message::services::RegistryMessageFactory;
/// use mockable::DefaultClock;
/// use serde_json::json;
///
/// #[derive(Debug)]
/// struct DoSomething(Message);
///
/// impl DomainMessage for DoSomething {
///     fn as_message(&self) -> &Message {
///         &self.0
///     }
/// }
///
/// impl ReconstructMessage for DoSomething {
///     const KIND: MessageKind = MessageKind::Command;
///
///     fn from_message(message: Message) -> Result<Self, MessageDataError> {
///         Ok(Self(message))
///     }
/// }
///
/// let registry = TypeRegistry::new()
///     .with_message::<DoSomething>("DoSomethingCommand")
///     .expect("registration");
/// let factory = RegistryMessageFactory::new(Arc::new(registry), Arc::new(DefaultClock));
///
/// let command = factory
///     .create_message_from_array(
///         "DoSomethingCommand",
///         MessageData::new().with_payload_entry("command", json!("payload")),
///     )
///     .expect("known message type");
///
/// assert_eq!(command.message_name(), "DoSomethingCommand");
/// assert_eq!(command.version().value(), 0);
/// assert!(command.metadata().is_empty());
/// ```
#[derive(Clone)]
pub struct RegistryMessageFactory<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    registry: Arc<TypeRegistry>,
    clock: Arc<C>,
    validator: DefaultMessageDataValidator,
}

impl<C> RegistryMessageFactory<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a factory with the default validation configuration.
    #[must_use]
    pub fn new(registry: Arc<TypeRegistry>, clock: Arc<C>) -> Self {
        Self::with_config(registry, clock, ValidationConfig::default())
    }

    /// Creates a factory with a custom validation configuration.
    #[must_use]
    pub const fn with_config(
        registry: Arc<TypeRegistry>,
        clock: Arc<C>,
        config: ValidationConfig,
    ) -> Self {
        Self {
            registry,
            clock,
            validator: DefaultMessageDataValidator::with_config(config),
        }
    }

    /// Returns the registry used for type resolution.
    #[must_use]
    pub const fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Builds a message and returns it as its concrete type.
    ///
    /// # Errors
    ///
    /// Returns the same errors as
    /// [`create_message_from_array`](MessageFactory::create_message_from_array),
    /// and `MessageFactoryError::InvalidMessageType` when the identifier is
    /// registered to a type other than `M`.
    pub fn create_typed_message<M: ReconstructMessage>(
        &self,
        type_identifier: &str,
        data: MessageData,
    ) -> FactoryResult<M> {
        let entry = self.resolve(type_identifier)?;
        if !entry.is::<M>() {
            return Err(MessageFactoryError::invalid_type(
                type_identifier,
                entry.type_name(),
            ));
        }
        let message_name = MessageName::new(type_identifier)?;
        let fields = self.populate(data)?;
        let message = M::from_message(Message::from_fields(message_name, M::KIND, fields))?;
        ensure_bound_name(type_identifier, entry, &message)?;
        Ok(message)
    }

    fn resolve(&self, type_identifier: &str) -> FactoryResult<&MessageTypeEntry> {
        match self.registry.resolve(type_identifier) {
            Some(TypeEntry::Message(entry)) => Ok(entry),
            Some(TypeEntry::Foreign { type_name }) => Err(MessageFactoryError::invalid_type(
                type_identifier,
                *type_name,
            )),
            None => Err(MessageFactoryError::unknown_type(type_identifier)),
        }
    }

    fn populate(&self, data: MessageData) -> FactoryResult<MessageFields> {
        self.validator.validate(&data)?;

        let MessageData {
            uuid,
            version,
            payload,
            metadata,
            created_at,
            ..
        } = data;

        let id = match uuid {
            Some(raw) => rules::parse_message_id(&raw)?,
            None => MessageId::new(),
        };

        Ok(MessageFields {
            uuid: id,
            version: version.map_or(MessageVersion::INITIAL, MessageVersion::new),
            payload: payload.unwrap_or_default(),
            metadata: metadata.unwrap_or_default(),
            created_at: created_at.unwrap_or_else(|| self.clock.utc()),
        })
    }
}

impl<C> MessageFactory for RegistryMessageFactory<C>
where
    C: Clock + Send + Sync,
{
    fn create_message_from_array(
        &self,
        type_identifier: &str,
        data: MessageData,
    ) -> FactoryResult<Box<dyn DomainMessage>> {
        let entry = self.resolve(type_identifier)?;
        let message_name = MessageName::new(type_identifier)?;
        let fields = self.populate(data)?;
        let message = entry.construct(message_name, fields)?;
        ensure_bound_name(type_identifier, entry, message.as_ref())?;
        Ok(message)
    }
}

/// A built message must report the identifier it was requested under.
fn ensure_bound_name<M>(
    type_identifier: &str,
    entry: &MessageTypeEntry,
    message: &M,
) -> FactoryResult<()>
where
    M: DomainMessage + ?Sized,
{
    if message.message_name() == type_identifier {
        Ok(())
    } else {
        Err(MessageFactoryError::invalid_type(
            type_identifier,
            entry.type_name(),
        ))
    }
}
