//! Application layer
//!
//! Use cases turn raw request fields into domain value objects and call the
//! domain services. Each returns a serializable response for the adapters.

pub mod bill;
pub mod house;
