//! Shared world state for message reconstruction BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use postmark::message::{
    domain::{DomainMessage, MessageData},
    error::MessageFactoryError,
    services::RegistryMessageFactory,
};
use rstest::fixture;

use crate::test_helpers::test_registry;

/// Scenario world for message reconstruction behaviour tests.
pub struct FactoryWorld {
    pub factory: Option<RegistryMessageFactory<DefaultClock>>,
    pub data: MessageData,
    pub started_at: Option<DateTime<Utc>>,
    pub last_result: Option<Result<Box<dyn DomainMessage>, MessageFactoryError>>,
}

impl FactoryWorld {
    /// Creates a world with no factory and an empty data bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factory: None,
            data: MessageData::new(),
            started_at: None,
            last_result: None,
        }
    }

    /// Installs a factory backed by the shared test registry.
    pub fn install_factory(&mut self) {
        self.factory = Some(RegistryMessageFactory::new(
            Arc::new(test_registry()),
            Arc::new(DefaultClock),
        ));
    }

    /// Returns the message built by the last when step.
    pub fn built_message(&self) -> Result<&dyn DomainMessage, eyre::Report> {
        let result = self
            .last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no message creation attempted"))?;
        result
            .as_ref()
            .map(|message| &**message)
            .map_err(|err| eyre::eyre!("unexpected creation failure: {err}"))
    }

    /// Returns the error raised by the last when step.
    pub fn creation_error(&self) -> Result<&MessageFactoryError, eyre::Report> {
        match self.last_result.as_ref() {
            Some(Err(err)) => Ok(err),
            Some(Ok(message)) => Err(eyre::eyre!(
                "expected creation to fail, built {}",
                message.message_name()
            )),
            None => Err(eyre::eyre!("no message creation attempted")),
        }
    }
}

impl Default for FactoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FactoryWorld {
    FactoryWorld::default()
}
