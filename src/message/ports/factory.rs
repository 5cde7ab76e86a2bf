//! Factory port for rebuilding messages from plain data.

use crate::message::{
    domain::{DomainMessage, MessageData},
    error::MessageFactoryError,
};

/// Result type for factory operations.
pub type FactoryResult<T> = Result<T, MessageFactoryError>;

/// Port for reconstructing messages from a type identifier and a data bag.
///
/// Processing runs in a fixed order and the first failure wins:
/// 1. Resolve the type identifier
/// 2. Confirm it names a message type
/// 3. Fill defaults for absent fields
/// 4. Delegate construction to the resolved type
/// 5. Confirm the built message reports `type_identifier` as its name
///
/// # Implementation Notes
///
/// Implementations should:
/// - Be stateless and thread-safe
/// - Read the clock at most once per call
/// - Perform no I/O and emit no log events
pub trait MessageFactory: Send + Sync {
    /// Builds a message of the type named by `type_identifier`.
    ///
    /// The returned message's name is `type_identifier` verbatim.
    ///
    /// # Errors
    ///
    /// Returns `MessageFactoryError::UnknownMessageType` if the identifier
    /// does not resolve, `MessageFactoryError::InvalidMessageType` if it
    /// resolves to a non-message type or the built message reports another
    /// name, and
    /// `MessageFactoryError::InvalidMessageData` if the data is rejected.
    fn create_message_from_array(
        &self,
        type_identifier: &str,
        data: MessageData,
    ) -> FactoryResult<Box<dyn DomainMessage>>;
}
