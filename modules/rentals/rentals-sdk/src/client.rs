//! `RentalsClientV1` trait definition.
//!
//! All methods take the caller's `ActorContext` explicitly; nothing is read
//! from ambient session state.

use async_trait::async_trait;
use uuid::Uuid;

use crate::actor::ActorContext;
use crate::errors::RentalsError;
use crate::models::{
    NewProperty, Profile, ProfileDefaults, ProfileFields, Property, PropertyPatch, Review,
    ReviewDraft, ReviewView,
};

/// Public API trait for the `rentals` module.
#[async_trait]
pub trait RentalsClientV1: Send + Sync {
    // Profiles

    /// Return the caller's profile, creating it on first use.
    ///
    /// `defaults` seed a profile that does not exist yet; they are ignored
    /// for an existing one.
    async fn ensure_profile(
        &self,
        ctx: &ActorContext,
        defaults: Option<ProfileDefaults>,
    ) -> Result<Profile, RentalsError>;

    async fn get_profile(&self, ctx: &ActorContext, id: Uuid) -> Result<Profile, RentalsError>;

    async fn upsert_profile(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        fields: ProfileFields,
    ) -> Result<Profile, RentalsError>;

    // Properties

    async fn get_property(&self, ctx: &ActorContext, id: Uuid) -> Result<Property, RentalsError>;

    async fn list_properties_by_owner(
        &self,
        ctx: &ActorContext,
        owner_id: Uuid,
    ) -> Result<Vec<Property>, RentalsError>;

    async fn create_property(
        &self,
        ctx: &ActorContext,
        new_property: NewProperty,
    ) -> Result<Property, RentalsError>;

    async fn update_property(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        patch: PropertyPatch,
    ) -> Result<Property, RentalsError>;

    async fn delete_property(&self, ctx: &ActorContext, id: Uuid) -> Result<(), RentalsError>;

    // Reviews

    async fn create_review(
        &self,
        ctx: &ActorContext,
        property_id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, RentalsError>;

    async fn update_review(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, RentalsError>;

    async fn delete_review(&self, ctx: &ActorContext, id: Uuid) -> Result<(), RentalsError>;

    // Aggregated views, most recent first

    /// Reviews of a single property.
    async fn reviews_for_property(
        &self,
        ctx: &ActorContext,
        property_id: Uuid,
    ) -> Result<Vec<ReviewView>, RentalsError>;

    /// Reviews written by the caller.
    async fn reviews_written_by(&self, ctx: &ActorContext)
    -> Result<Vec<ReviewView>, RentalsError>;

    /// Reviews of every property owned by `landlord_id`.
    async fn reviews_received_by(
        &self,
        ctx: &ActorContext,
        landlord_id: Uuid,
    ) -> Result<Vec<ReviewView>, RentalsError>;
}
