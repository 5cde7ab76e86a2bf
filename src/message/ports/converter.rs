//! Converter port for flattening messages back into plain data.

use crate::message::{
    domain::{DomainMessage, MessageData},
    error::MessageDataError,
};

/// Port for converting a message into a fully populated data bag.
///
/// The output is the inverse of [`MessageFactory`](super::MessageFactory):
/// feeding it back with the message's name rebuilds a field-equal message.
pub trait MessageConverter: Send + Sync {
    /// Converts a message into a data bag with every field set.
    ///
    /// # Errors
    ///
    /// Returns `MessageDataError` if the resulting data fails the converter's
    /// assertions.
    fn convert_to_array(
        &self,
        message: &dyn DomainMessage,
    ) -> Result<MessageData, MessageDataError>;
}
