//! House registry and milk-delivery bill ledger.
//!
//! Layers, inside out: `domain` (value objects, entities, ports, services),
//! `application` (use cases), `infrastructure` (config, storage) and
//! `adapters` (HTTP).

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
