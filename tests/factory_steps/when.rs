//! When steps for message reconstruction BDD scenarios.

use super::world::FactoryWorld;
use chrono::Utc;
use postmark::message::ports::MessageFactory;
use rstest_bdd_macros::when;

#[when(r#"a message of type "{type_identifier}" is created from the data"#)]
fn create_message(world: &mut FactoryWorld, type_identifier: String) -> Result<(), eyre::Report> {
    let factory = world
        .factory
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing factory in scenario world"))?;

    world.started_at = Some(Utc::now());
    let result = factory.create_message_from_array(&type_identifier, world.data.clone());
    world.last_result = Some(result);
    Ok(())
}
