//! Converter flattening messages into data bags without reshaping them.

use crate::message::{
    domain::{DomainMessage, MessageData},
    error::MessageDataError,
    ports::{
        converter::MessageConverter,
        validator::{MessageDataValidator, ValidationConfig},
    },
    validation::DefaultMessageDataValidator,
};

/// Converter that copies every message field into a [`MessageData`] as-is.
///
/// The result is asserted with the configured rules before it is returned.
///
/// # Examples
///
/// ```
/// use postmark::message::adapters::NoOpMessageConverter;
/// use postmark::message::domain::{Message, MessageKind, MessageName, Payload};
/// use postmark::message::ports::MessageConverter;
/// use mockable::DefaultClock;
///
/// let name = MessageName::new("app.UserRegistered").expect("valid name");
/// let message = Message::new(name, MessageKind::Event, Payload::new(), &DefaultClock);
///
/// let data = NoOpMessageConverter::new()
///     .convert_to_array(&message)
///     .expect("valid data");
/// assert_eq!(data.message_name.as_deref(), Some("app.UserRegistered"));
/// assert_eq!(data.version, Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoOpMessageConverter {
    validator: DefaultMessageDataValidator,
}

impl NoOpMessageConverter {
    /// Creates a converter with the default validation configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter with a custom validation configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self {
            validator: DefaultMessageDataValidator::with_config(config),
        }
    }
}

impl MessageConverter for NoOpMessageConverter {
    fn convert_to_array(
        &self,
        message: &dyn DomainMessage,
    ) -> Result<MessageData, MessageDataError> {
        let data = MessageData {
            message_name: Some(message.message_name().to_owned()),
            uuid: Some(message.uuid().to_string()),
            version: Some(message.version().value()),
            payload: Some(message.payload().clone()),
            metadata: Some(message.metadata().clone()),
            created_at: Some(message.created_at()),
        };
        self.validator.validate(&data)?;
        Ok(data)
    }
}
