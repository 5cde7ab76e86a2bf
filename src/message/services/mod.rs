//! Application services for the message subsystem.
//!
//! Services implement the ports callers depend on, coordinating the registry,
//! the clock and the data assertions.

mod factory;

pub use factory::RegistryMessageFactory;
