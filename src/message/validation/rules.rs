//! Individual assertion rule implementations.
//!
//! Each rule is a pure function that checks one aspect of a message data
//! bag. Rules return `Ok(())` on success or a specific `MessageDataError`.

use crate::message::{
    domain::{MessageData, MessageId, Metadata},
    error::MessageDataError,
    ports::validator::ValidationConfig,
};

/// Validates that a supplied UUID parses.
///
/// # Errors
///
/// Returns `MessageDataError::InvalidUuid` for a malformed string and
/// `MessageDataError::NilUuid` for the nil UUID when the configuration
/// rejects it.
pub fn validate_uuid(data: &MessageData, config: &ValidationConfig) -> Result<(), MessageDataError> {
    let Some(raw) = data.uuid.as_deref() else {
        return Ok(());
    };
    let id = parse_message_id(raw)?;
    if config.reject_nil_uuid && id.as_ref().is_nil() {
        return Err(MessageDataError::NilUuid);
    }
    Ok(())
}

/// Validates metadata keys and values against the configuration.
///
/// # Errors
///
/// Returns `MessageDataError::EmptyMetadataKey`,
/// `MessageDataError::NonScalarMetadata` or
/// `MessageDataError::TooManyMetadataEntries`, combined when several apply.
pub fn validate_metadata(
    metadata: &Metadata,
    config: &ValidationConfig,
) -> Result<(), MessageDataError> {
    let mut errors = Vec::new();

    if let Some(max) = config.max_metadata_entries
        && metadata.len() > max
    {
        errors.push(MessageDataError::TooManyMetadataEntries {
            max,
            actual: metadata.len(),
        });
    }

    for (key, value) in metadata {
        if !config.allow_empty_metadata_keys && key.trim().is_empty() {
            errors.push(MessageDataError::EmptyMetadataKey);
        }
        if config.require_scalar_metadata && (value.is_array() || value.is_object()) {
            errors.push(MessageDataError::non_scalar_metadata(key.as_str()));
        }
    }

    MessageDataError::combine(errors).map_or(Ok(()), Err)
}

/// Parses the string form of a message UUID.
///
/// # Errors
///
/// Returns `MessageDataError::InvalidUuid` carrying the rejected input.
pub fn parse_message_id(raw: &str) -> Result<MessageId, MessageDataError> {
    raw.parse()
        .map_err(|_| MessageDataError::InvalidUuid(raw.to_owned()))
}
