//! Validator port for message data assertions.
//!
//! Defines the abstract interface for asserting raw message data before a
//! message is built from it, or after a message is flattened back into it.

use crate::message::{domain::MessageData, error::MessageDataError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, MessageDataError>;

/// Port for asserting message data.
///
/// Only fields present in the bag are checked; absent fields are defaulted
/// later and always satisfy the rules.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all assertion failures before returning (not fail-fast)
/// - Use `MessageDataError::combine` to merge them
/// - Be stateless and thread-safe
pub trait MessageDataValidator: Send + Sync {
    /// Asserts every rule against the data bag.
    ///
    /// # Errors
    ///
    /// Returns `MessageDataError` if any rule fails. Multiple failures are
    /// combined using `MessageDataError::Multiple`.
    fn validate(&self, data: &MessageData) -> ValidationResult<()>;

    /// Asserts only the identity field: the UUID.
    ///
    /// A supplied `message_name` is never asserted, since the name a message
    /// is built under comes from its type identifier.
    ///
    /// # Errors
    ///
    /// Returns `MessageDataError` if an identity rule fails.
    fn validate_identity(&self, data: &MessageData) -> ValidationResult<()>;

    /// Asserts only the metadata map.
    ///
    /// # Errors
    ///
    /// Returns `MessageDataError` if a metadata rule fails.
    fn validate_metadata(&self, data: &MessageData) -> ValidationResult<()>;
}

/// Configuration for message data assertions.
///
/// # Examples
///
/// ```
/// use postmark::message::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(!config.reject_nil_uuid);
/// assert!(!config.require_scalar_metadata);
///
/// let strict = ValidationConfig::strict();
/// assert_eq!(strict.max_metadata_entries, Some(64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Whether the nil UUID is rejected.
    pub reject_nil_uuid: bool,
    /// Whether metadata values must be scalars or null.
    pub require_scalar_metadata: bool,
    /// Maximum number of metadata entries, unbounded when `None`.
    pub max_metadata_entries: Option<usize>,
    /// Whether empty metadata keys are accepted.
    pub allow_empty_metadata_keys: bool,
}

/// The default only requires a supplied UUID to parse. Any parseable UUID,
/// the nil UUID included, is kept as given.
impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_nil_uuid: false,
            require_scalar_metadata: false,
            max_metadata_entries: None,
            allow_empty_metadata_keys: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a strict configuration that rejects the nil UUID and keeps
    /// metadata flat and small.
    ///
    /// Useful when metadata is forwarded as transport headers.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_nil_uuid: true,
            require_scalar_metadata: true,
            max_metadata_entries: Some(64),
            allow_empty_metadata_keys: false,
        }
    }
}
