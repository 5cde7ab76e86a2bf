//! Validation service implementation.
//!
//! Provides the default implementation of the `MessageDataValidator` port,
//! combining individual rules into a single validator.

use crate::message::{
    domain::MessageData,
    error::MessageDataError,
    ports::validator::{MessageDataValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Default implementation of the message data validator.
///
/// Applies all rules in order, collecting errors to provide comprehensive
/// feedback rather than failing on the first one.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::MessageData;
/// use postmark::message::ports::validator::MessageDataValidator;
/// use postmark::message::validation::DefaultMessageDataValidator;
///
/// let validator = DefaultMessageDataValidator::new();
/// let data = MessageData::new().with_uuid("3f2504e0-4f89-11d3-9a0c-0305e82c3301");
/// assert!(validator.validate(&data).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultMessageDataValidator {
    config: ValidationConfig,
}

impl DefaultMessageDataValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl MessageDataValidator for DefaultMessageDataValidator {
    fn validate(&self, data: &MessageData) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_identity(data) {
            collect_errors(&mut errors, e);
        }

        if let Err(e) = self.validate_metadata(data) {
            collect_errors(&mut errors, e);
        }

        MessageDataError::combine(errors).map_or(Ok(()), Err)
    }

    fn validate_identity(&self, data: &MessageData) -> ValidationResult<()> {
        rules::validate_uuid(data, &self.config)
    }

    fn validate_metadata(&self, data: &MessageData) -> ValidationResult<()> {
        data.metadata
            .as_ref()
            .map_or(Ok(()), |metadata| rules::validate_metadata(metadata, &self.config))
    }
}

/// Helper function to collect errors, flattening `Multiple` variants.
fn collect_errors(errors: &mut Vec<MessageDataError>, error: MessageDataError) {
    match error {
        MessageDataError::Multiple(inner) => errors.extend(inner),
        other => errors.push(other),
    }
}

// Note: Unit tests for DefaultMessageDataValidator are located in
// src/message/tests/validation_tests.rs using rstest fixtures.
