//! Identity and revision newtypes carried by every message.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a single message instance.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::MessageId;
///
/// let id = MessageId::new();
/// assert!(!id.as_ref().is_nil());
///
/// let parsed: MessageId = "3f2504e0-4f89-11d3-9a0c-0305e82c3301".parse().expect("valid uuid");
/// assert_eq!(parsed.to_string(), "3f2504e0-4f89-11d3-9a0c-0305e82c3301");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Each default is a fresh v4 identifier, of the kind the factory assigns
/// when a data bag carries no `uuid`.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for MessageId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Revision counter of the entity a message originates from.
///
/// Versions start at zero and never go negative.
///
/// # Examples
///
/// ```
/// use postmark::message::domain::MessageVersion;
///
/// let version = MessageVersion::default();
/// assert_eq!(version.value(), 0);
/// assert_eq!(version.next().value(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageVersion(u64);

impl MessageVersion {
    /// The version assigned when none is supplied.
    pub const INITIAL: Self = Self(0);

    /// Creates a version from a value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying version value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the following version, saturating at `u64::MAX`.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for MessageVersion {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
