//! Message types and registry shared by integration tests.

use postmark::message::{
    domain::{DomainMessage, Message, MessageKind, ReconstructMessage},
    error::MessageDataError,
    registry::TypeRegistry,
};

/// Identifier the test command is registered under.
pub const DO_SOMETHING: &str = "DoSomethingCommand";

/// Identifier of a known type that is not a message.
pub const UNRELATED: &str = "SomeUnrelatedType";

/// Identifier of the test event.
pub const SOMETHING_HAPPENED: &str = "SomethingHappenedEvent";

/// Command carrying an arbitrary payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DoSomething(Message);

impl DomainMessage for DoSomething {
    fn as_message(&self) -> &Message {
        &self.0
    }
}

impl ReconstructMessage for DoSomething {
    const KIND: MessageKind = MessageKind::Command;

    fn from_message(message: Message) -> Result<Self, MessageDataError> {
        Ok(Self(message))
    }
}

/// Event whose payload must name the affected item.
#[derive(Debug, Clone, PartialEq)]
pub struct SomethingHappened(Message);

impl DomainMessage for SomethingHappened {
    fn as_message(&self) -> &Message {
        &self.0
    }
}

impl ReconstructMessage for SomethingHappened {
    const KIND: MessageKind = MessageKind::Event;

    fn from_message(message: Message) -> Result<Self, MessageDataError> {
        message.require_payload_key("item")?;
        Ok(Self(message))
    }
}

/// Value type the host knows by name.
#[derive(Debug)]
pub struct SomeUnrelatedType;

/// Builds the registry used across integration tests.
pub fn test_registry() -> TypeRegistry {
    TypeRegistry::new()
        .with_message::<DoSomething>(DO_SOMETHING)
        .and_then(|r| r.with_message::<SomethingHappened>(SOMETHING_HAPPENED))
        .and_then(|r| r.with_foreign::<SomeUnrelatedType>(UNRELATED))
        .expect("test registry should build")
}
