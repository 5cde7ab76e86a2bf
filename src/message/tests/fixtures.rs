//! Shared message types, clocks and fixtures for unit tests.

use crate::message::{
    domain::{DomainMessage, Message, MessageKind, MessageName, ReconstructMessage},
    error::MessageDataError,
    registry::TypeRegistry,
    services::RegistryMessageFactory,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;

pub const DO_SOMETHING: &str = "DoSomethingCommand";
pub const SOMETHING_DONE: &str = "SomethingDoneEvent";
pub const FETCH_SOMETHING: &str = "FetchSomethingQuery";
pub const STRICT_COMMAND: &str = "StrictCommand";
pub const UNRELATED: &str = "SomeUnrelatedType";
pub const RENAMING_COMMAND: &str = "RenamingCommand";
pub const SAMPLE_UUID: &str = "3f2504e0-4f89-11d3-9a0c-0305e82c3301";

/// Command accepting any payload.
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

/// Event accepting any payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SomethingDone(Message);

impl DomainMessage for SomethingDone {
    fn as_message(&self) -> &Message {
        &self.0
    }
}

impl ReconstructMessage for SomethingDone {
    const KIND: MessageKind = MessageKind::Event;

    fn from_message(message: Message) -> Result<Self, MessageDataError> {
        Ok(Self(message))
    }
}

/// Query accepting any payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSomething(Message);

impl DomainMessage for FetchSomething {
    fn as_message(&self) -> &Message {
        &self.0
    }
}

impl ReconstructMessage for FetchSomething {
    const KIND: MessageKind = MessageKind::Query;

    fn from_message(message: Message) -> Result<Self, MessageDataError> {
        Ok(Self(message))
    }
}

/// Command whose payload must carry a `command` key.
#[derive(Debug, Clone, PartialEq)]
pub struct StrictCommand(Message);

impl DomainMessage for StrictCommand {
    fn as_message(&self) -> &Message {
        &self.0
    }
}

impl ReconstructMessage for StrictCommand {
    const KIND: MessageKind = MessageKind::Command;

    fn from_message(message: Message) -> Result<Self, MessageDataError> {
        message.require_payload_key("command")?;
        Ok(Self(message))
    }
}

/// Command that rebuilds itself under a name of its own choosing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamingCommand(Message);

impl DomainMessage for RenamingCommand {
    fn as_message(&self) -> &Message {
        &self.0
    }
}

impl ReconstructMessage for RenamingCommand {
    const KIND: MessageKind = MessageKind::Command;

    fn from_message(message: Message) -> Result<Self, MessageDataError> {
        let renamed = MessageName::new("SomethingElse")?;
        Ok(Self(Message::from_fields(
            renamed,
            Self::KIND,
            message.into_fields(),
        )))
    }
}

/// A type the host knows by name that is not a message.
#[derive(Debug)]
pub struct SomeUnrelatedType;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub type TestFactory = RegistryMessageFactory<FixedClock>;

#[fixture]
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0)
        .single()
        .expect("valid fixed instant")
}

#[fixture]
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register::<DoSomething>(DO_SOMETHING)
        .expect("register command");
    registry
        .register::<SomethingDone>(SOMETHING_DONE)
        .expect("register event");
    registry
        .register::<FetchSomething>(FETCH_SOMETHING)
        .expect("register query");
    registry
        .register::<StrictCommand>(STRICT_COMMAND)
        .expect("register strict command");
    registry
        .register::<RenamingCommand>(RENAMING_COMMAND)
        .expect("register renaming command");
    registry
        .register_foreign::<SomeUnrelatedType>(UNRELATED)
        .expect("register foreign type");
    registry
}

#[fixture]
pub fn factory(registry: TypeRegistry, fixed_instant: DateTime<Utc>) -> TestFactory {
    RegistryMessageFactory::new(Arc::new(registry), Arc::new(FixedClock(fixed_instant)))
}
