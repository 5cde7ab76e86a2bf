//! Given steps for message reconstruction BDD scenarios.

use super::world::FactoryWorld;
use chrono::Utc;
use postmark::message::domain::MessageData;
use rstest_bdd_macros::given;
use serde_json::json;

/// UUID supplied by the fully populated scenario.
pub const SUPPLIED_UUID: &str = "3f2504e0-4f89-11d3-9a0c-0305e82c3301";

#[given("a factory that knows the DoSomething command")]
fn factory_with_command(world: &mut FactoryWorld) {
    world.install_factory();
}

#[given("message data with uuid, version {version:u64}, payload, metadata and timestamp")]
fn fully_populated_data(world: &mut FactoryWorld, version: u64) {
    world.data = MessageData::new()
        .with_uuid(SUPPLIED_UUID)
        .with_version(version)
        .with_payload_entry("command", json!("payload"))
        .with_metadata_entry("command", json!("metadata"))
        .with_created_at(Utc::now());
}

#[given("message data with only a payload")]
fn payload_only_data(world: &mut FactoryWorld) {
    world.data = MessageData::new().with_payload_entry("command", json!("payload"));
}

#[given("empty message data")]
fn empty_data(world: &mut FactoryWorld) {
    world.data = MessageData::new();
}
