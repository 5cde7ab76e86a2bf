//! Adapters for the message module.
//!
//! # Available Adapters
//!
//! - [`NoOpMessageConverter`]: flattens a message into a [`MessageData`] bag
//!   that a factory can rebuild it from
//!
//! [`MessageData`]: crate::message::domain::MessageData

mod converter;

pub use converter::NoOpMessageConverter;
