//! Infrastructure storage layer - database persistence.
//!
//! ## Architecture
//!
//! This module contains ALL SeaORM-specific code and database operations:
//! - `entity/` - SeaORM entity definitions (profiles, properties, reviews)
//! - `mapper.rs` - Conversions between SeaORM models and SDK contract types
//! - `migrations/` - Database schema migrations
//! - `*_sea_repo.rs` - Repository implementations of the domain ports
//!
//! ## Layering Rules
//!
//! The infrastructure layer:
//! - **Contains**: ALL SeaORM imports and database-specific code
//! - **Uses**: `rentals_sdk` contract types as the domain model
//! - **Provides**: implementations of the `domain::repos` traits

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;

mod profiles_sea_repo;
mod properties_sea_repo;
mod reviews_sea_repo;

pub use profiles_sea_repo::OrmProfilesRepository;
pub use properties_sea_repo::OrmPropertiesRepository;
pub use reviews_sea_repo::OrmReviewsRepository;
