//! Rentals Module
//!
//! Role-gated data access for a rental marketplace: profiles, properties
//! owned by landlords, and reviews written by any authenticated identity.
//!
//! ## Public API
//!
//! The public API is defined in the `rentals-sdk` crate and re-exported here:
//! - `RentalsClientV1` - trait for in-process consumers
//! - `ActorContext` - explicit caller context passed into every call
//! - `Profile`, `Property`, `Review`, `ReviewView` and friends - data models
//! - `RentalsError`, `DenyReason` - error types
//!
//! Consumers build a [`Rentals`] module and call `rentals.client()`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use rentals_sdk::{
    ActorContext, DenyReason, NewProperty, Profile, ProfileDefaults, ProfileFields, Property,
    PropertyPatch, RentalsClientV1, RentalsError, Review, ReviewDraft, ReviewView, Role,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::Rentals;

// === LOCAL CLIENT ===
pub mod local_client;

// === CONFIGURATION ===
pub mod config;
pub use config::{DatabaseConfig, RentalsConfig};

// === INTERNAL MODULES ===
// WARNING: These modules are internal implementation details!
// They are exposed only for comprehensive testing and should NOT be used by external consumers.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
