//! Step definitions for message reconstruction scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
