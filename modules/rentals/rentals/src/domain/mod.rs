//! Domain layer - authorization rules, business logic and storage ports.
//!
//! The domain layer:
//! - **MAY** import: `rentals_sdk` (contract types), `sea_orm::ConnectionTrait`
//! - **MUST NOT** import: `infra::*` (wiring happens in `module.rs`)

pub mod authz;
pub mod error;
pub mod events;
pub mod ports;
pub mod repos;
pub mod service;
