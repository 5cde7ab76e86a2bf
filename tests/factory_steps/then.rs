//! Then steps for message reconstruction BDD scenarios.

use super::{given::SUPPLIED_UUID, world::FactoryWorld};
use chrono::Utc;
use postmark::message::domain::MessageVersion;
use rstest_bdd_macros::then;

#[then(r#"the message is named "{expected}""#)]
fn message_is_named(world: &FactoryWorld, expected: String) -> Result<(), eyre::Report> {
    let message = world.built_message()?;
    if message.message_name() != expected {
        return Err(eyre::eyre!(
            "expected name {expected}, found {}",
            message.message_name()
        ));
    }
    Ok(())
}

#[then("the message carries exactly the supplied fields")]
fn carries_supplied_fields(world: &FactoryWorld) -> Result<(), eyre::Report> {
    let message = world.built_message()?;
    let data = &world.data;

    if Some(message.uuid().to_string()) != data.uuid {
        return Err(eyre::eyre!("uuid {} was not preserved", message.uuid()));
    }
    if message.uuid().to_string() != SUPPLIED_UUID {
        return Err(eyre::eyre!("unexpected uuid {}", message.uuid()));
    }
    if Some(message.version().value()) != data.version {
        return Err(eyre::eyre!("version {} was not preserved", message.version()));
    }
    if Some(message.payload()) != data.payload.as_ref() {
        return Err(eyre::eyre!("payload was not preserved"));
    }
    if Some(message.metadata()) != data.metadata.as_ref() {
        return Err(eyre::eyre!("metadata was not preserved"));
    }
    if Some(message.created_at()) != data.created_at {
        return Err(eyre::eyre!("created_at was not preserved"));
    }
    Ok(())
}

#[then("the message has version {version:u64} and empty metadata")]
fn has_version_and_empty_metadata(
    world: &FactoryWorld,
    version: u64,
) -> Result<(), eyre::Report> {
    let message = world.built_message()?;
    if message.version() != MessageVersion::new(version) {
        return Err(eyre::eyre!(
            "expected version {version}, found {}",
            message.version()
        ));
    }
    if !message.metadata().is_empty() {
        return Err(eyre::eyre!("expected empty metadata"));
    }
    if message.payload().get("command").is_none() {
        return Err(eyre::eyre!("payload was not passed through"));
    }
    Ok(())
}

#[then("the message has a fresh uuid and a current timestamp")]
fn has_fresh_identity(world: &FactoryWorld) -> Result<(), eyre::Report> {
    let message = world.built_message()?;
    let started_at = world
        .started_at
        .ok_or_else(|| eyre::eyre!("missing start time in scenario world"))?;

    if message.uuid().as_ref().is_nil() {
        return Err(eyre::eyre!("expected a generated uuid"));
    }
    let created_at = message.created_at();
    if created_at < started_at || created_at > Utc::now() {
        return Err(eyre::eyre!(
            "timestamp {created_at} is outside the invocation window"
        ));
    }
    Ok(())
}

#[then("creation fails because the type is unknown")]
fn fails_as_unknown(world: &FactoryWorld) -> Result<(), eyre::Report> {
    let err = world.creation_error()?;
    if !err.is_unknown_type() {
        return Err(eyre::eyre!("expected unknown type error, found {err}"));
    }
    Ok(())
}

#[then("creation fails because the type is not a message")]
fn fails_as_invalid(world: &FactoryWorld) -> Result<(), eyre::Report> {
    let err = world.creation_error()?;
    if !err.is_invalid_type() {
        return Err(eyre::eyre!("expected invalid type error, found {err}"));
    }
    Ok(())
}
