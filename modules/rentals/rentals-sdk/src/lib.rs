//! Rentals SDK
//!
//! This crate provides the public API for the `rentals` module:
//! - `RentalsClientV1` trait
//! - Model types for profiles, properties and reviews
//! - The explicit caller context (`ActorContext`)
//! - Error type (`RentalsError`) and denial reasons (`DenyReason`)
//!
//! ## Usage
//!
//! ```ignore
//! use rentals_sdk::{ActorContext, RentalsClientV1};
//!
//! let ctx = ActorContext::builder().subject_id(user_id).build();
//! let profile = client.ensure_profile(&ctx, None).await?;
//! let written = client.reviews_written_by(&ctx).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod actor;
pub mod client;
pub mod errors;
pub mod models;

pub use actor::{ActorContext, ActorContextBuilder, Identity};
pub use client::RentalsClientV1;
pub use errors::{DenyReason, RentalsError};
pub use models::{
    NewProperty, Profile, ProfileDefaults, ProfileFields, Property, PropertyPatch, Review,
    ReviewDraft, ReviewView, Role,
};
