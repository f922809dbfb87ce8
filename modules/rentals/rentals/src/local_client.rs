//! Local implementation of `RentalsClientV1`.
//!
//! This client is used for in-process consumers. It forwards the caller's
//! `ActorContext` to the domain services and converts errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use rentals_sdk::{
    ActorContext, NewProperty, Profile, ProfileDefaults, ProfileFields, Property, PropertyPatch,
    RentalsClientV1, RentalsError, Review, ReviewDraft, ReviewView,
};

use crate::module::ConcreteAppServices;

/// Local implementation of the `RentalsClientV1` trait that delegates to the domain services.
pub struct RentalsLocalClient {
    services: Arc<ConcreteAppServices>,
}

impl RentalsLocalClient {
    #[must_use]
    pub(crate) fn new(services: Arc<ConcreteAppServices>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl RentalsClientV1 for RentalsLocalClient {
    // Profile operations
    async fn ensure_profile(
        &self,
        ctx: &ActorContext,
        defaults: Option<ProfileDefaults>,
    ) -> Result<Profile, RentalsError> {
        self.services
            .profiles
            .ensure_profile(ctx, defaults)
            .await
            .map_err(Into::into)
    }

    async fn get_profile(&self, ctx: &ActorContext, id: Uuid) -> Result<Profile, RentalsError> {
        self.services
            .profiles
            .get_profile(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn upsert_profile(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        fields: ProfileFields,
    ) -> Result<Profile, RentalsError> {
        self.services
            .profiles
            .upsert_profile(ctx, id, fields)
            .await
            .map_err(Into::into)
    }

    // Property operations
    async fn get_property(&self, ctx: &ActorContext, id: Uuid) -> Result<Property, RentalsError> {
        self.services
            .properties
            .get_property(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn list_properties_by_owner(
        &self,
        ctx: &ActorContext,
        owner_id: Uuid,
    ) -> Result<Vec<Property>, RentalsError> {
        self.services
            .properties
            .list_properties_by_owner(ctx, owner_id)
            .await
            .map_err(Into::into)
    }

    async fn create_property(
        &self,
        ctx: &ActorContext,
        new_property: NewProperty,
    ) -> Result<Property, RentalsError> {
        self.services
            .properties
            .create_property(ctx, new_property)
            .await
            .map_err(Into::into)
    }

    async fn update_property(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        patch: PropertyPatch,
    ) -> Result<Property, RentalsError> {
        self.services
            .properties
            .update_property(ctx, id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_property(&self, ctx: &ActorContext, id: Uuid) -> Result<(), RentalsError> {
        self.services
            .properties
            .delete_property(ctx, id)
            .await
            .map_err(Into::into)
    }

    // Review operations
    async fn create_review(
        &self,
        ctx: &ActorContext,
        property_id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, RentalsError> {
        self.services
            .reviews
            .create_review(ctx, property_id, draft)
            .await
            .map_err(Into::into)
    }

    async fn update_review(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, RentalsError> {
        self.services
            .reviews
            .update_review(ctx, id, draft)
            .await
            .map_err(Into::into)
    }

    async fn delete_review(&self, ctx: &ActorContext, id: Uuid) -> Result<(), RentalsError> {
        self.services
            .reviews
            .delete_review(ctx, id)
            .await
            .map_err(Into::into)
    }

    // Aggregated views
    async fn reviews_for_property(
        &self,
        ctx: &ActorContext,
        property_id: Uuid,
    ) -> Result<Vec<ReviewView>, RentalsError> {
        self.services
            .views
            .reviews_for_property(ctx, property_id)
            .await
            .map_err(Into::into)
    }

    async fn reviews_written_by(&self, ctx: &ActorContext) -> Result<Vec<ReviewView>, RentalsError> {
        self.services
            .views
            .reviews_written_by(ctx)
            .await
            .map_err(Into::into)
    }

    async fn reviews_received_by(
        &self,
        ctx: &ActorContext,
        landlord_id: Uuid,
    ) -> Result<Vec<ReviewView>, RentalsError> {
        self.services
            .views
            .reviews_received_by(ctx, landlord_id)
            .await
            .map_err(Into::into)
    }
}
