//! Infrastructure layer
//!
//! Configuration loading and the storage adapters behind the domain ports.

pub mod config;
pub mod persistence;
