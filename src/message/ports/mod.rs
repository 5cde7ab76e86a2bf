//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that callers depend on. Services and
//! adapters implement them.

pub mod converter;
pub mod factory;
pub mod validator;

pub use converter::MessageConverter;
pub use factory::{FactoryResult, MessageFactory};
pub use validator::{MessageDataValidator, ValidationConfig};
