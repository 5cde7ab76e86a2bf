//! Postmark: domain message primitives.
//!
//! This crate provides the immutable message value shared by commands,
//! events and queries, and the factory that rebuilds such messages from a
//! type identifier and a plain data bag.
//!
//! # Architecture
//!
//! Postmark follows hexagonal architecture principles:
//!
//! - **Domain**: Pure message types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for factories, converters and
//!   validators
//! - **Services and adapters**: Concrete implementations of those ports
//!
//! # Modules
//!
//! - [`message`]: Message model, type registry and reconstruction

pub mod message;
