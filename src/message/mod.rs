//! Message model and reconstruction from plain data.
//!
//! # Architecture
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::MessageData`],
//!   [`domain::MessageKind`], etc.)
//! - **Registry**: Explicit mapping from type identifiers to message types
//!   ([`registry::TypeRegistry`])
//! - **Ports**: Abstract trait interfaces ([`ports::factory::MessageFactory`],
//!   [`ports::converter::MessageConverter`], [`ports::validator::MessageDataValidator`])
//! - **Services**: The registry-backed factory ([`services::RegistryMessageFactory`])
//! - **Adapters**: Concrete converters ([`adapters::NoOpMessageConverter`])
//! - **Validation**: Assertions applied to raw message data
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use postmark::message::domain::{
//!     DomainMessage, Message, MessageData, MessageKind, ReconstructMessage,
//! };
//! use postmark::message::error::{MessageDataError, MessageFactoryError};
//! use postmark::message::ports::MessageFactory;
//! use postmark::message::registry::TypeRegistry;
//! use postmark::message::services::RegistryMessageFactory;
//! use mockable::DefaultClock;
//! use serde_json::json;
//!
//! #[derive(Debug)]
//! struct OrderPlaced(Message);
//!
//! impl DomainMessage for OrderPlaced {
//!     fn as_message(&self) -> &Message {
//!         &self.0
//!     }
//! }
//!
//! impl ReconstructMessage for OrderPlaced {
//!     const KIND: MessageKind = MessageKind::Event;
//!
//!     fn from_message(message: Message) -> Result<Self, MessageDataError> {
//!         Ok(Self(message))
//!     }
//! }
//!
//! let registry = TypeRegistry::new()
//!     .with_message::<OrderPlaced>("shop.OrderPlaced")
//!     .expect("registration");
//! let factory = RegistryMessageFactory::new(Arc::new(registry), Arc::new(DefaultClock));
//!
//! let event = factory
//!     .create_message_from_array(
//!         "shop.OrderPlaced",
//!         MessageData::new()
//!             .with_version(3)
//!             .with_payload_entry("order_id", json!(42)),
//!     )
//!     .expect("known message type");
//! assert_eq!(event.message_kind(), MessageKind::Event);
//! assert_eq!(event.version().value(), 3);
//!
//! let missing = factory.create_message_from_array("shop.Unknown", MessageData::new());
//! assert!(matches!(missing, Err(MessageFactoryError::UnknownMessageType(_))));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod registry;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
