//! Message data validation.
//!
//! This module provides the default implementation of message data
//! assertions, including individual rules and the composite validator.

pub mod rules;
pub mod service;

pub use service::DefaultMessageDataValidator;
