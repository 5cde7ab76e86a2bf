//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod data;
mod ids;
mod kind;
mod message;
mod name;

pub use data::{MessageData, MessageFields, Metadata, Payload};
pub use ids::{MessageId, MessageVersion};
pub use kind::{MessageKind, ParseMessageKindError};
pub use message::{DomainMessage, Message, ReconstructMessage};
pub use name::MessageName;
