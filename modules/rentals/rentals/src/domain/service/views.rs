//! Aggregation layer: reviews joined with their property and reviewer.
//!
//! Each view is a single ordered query, so a caller gets either the full list
//! or an error, never a partial list.

use std::sync::Arc;

use rentals_sdk::{ActorContext, ReviewView};
use tracing::debug;
use uuid::Uuid;

use super::{Shared, require_actor};
use crate::domain::authz::{Action, Actor, Resource};
use crate::domain::error::DomainError;
use crate::domain::repos::{PropertiesRepository, ReviewJoinRow, ReviewsRepository};

pub struct ReviewViewsService<RR: ReviewsRepository, PPR: PropertiesRepository> {
    reviews: Arc<RR>,
    properties: Arc<PPR>,
    shared: Shared,
}

impl<RR: ReviewsRepository, PPR: PropertiesRepository> ReviewViewsService<RR, PPR> {
    pub(crate) fn new(reviews: Arc<RR>, properties: Arc<PPR>, shared: Shared) -> Self {
        Self {
            reviews,
            properties,
            shared,
        }
    }

    /// Reviews authored by the caller, newest first.
    pub async fn reviews_written_by(&self, ctx: &ActorContext) -> Result<Vec<ReviewView>, DomainError> {
        let actor = require_actor(ctx)?;
        self.authorize_read(&actor)?;

        let rows = self.reviews.written_by(&self.shared.db, actor.id).await?;
        debug!(reviewer_id = %actor.id, count = rows.len(), "Loaded written reviews");

        Ok(rows.into_iter().map(|row| self.to_view(row)).collect())
    }

    /// Reviews of every property owned by `landlord_id`, newest first.
    pub async fn reviews_received_by(
        &self,
        ctx: &ActorContext,
        landlord_id: Uuid,
    ) -> Result<Vec<ReviewView>, DomainError> {
        let actor = require_actor(ctx)?;
        self.authorize_read(&actor)?;

        let rows = self.reviews.received_by(&self.shared.db, landlord_id).await?;
        debug!(owner_id = %landlord_id, count = rows.len(), "Loaded received reviews");

        Ok(rows.into_iter().map(|row| self.to_view(row)).collect())
    }

    pub async fn reviews_for_property(
        &self,
        ctx: &ActorContext,
        property_id: Uuid,
    ) -> Result<Vec<ReviewView>, DomainError> {
        let actor = require_actor(ctx)?;
        self.authorize_read(&actor)?;

        if self.properties.get(&self.shared.db, property_id).await?.is_none() {
            return Err(DomainError::property_not_found(property_id));
        }

        let rows = self.reviews.for_property(&self.shared.db, property_id).await?;
        Ok(rows.into_iter().map(|row| self.to_view(row)).collect())
    }

    fn authorize_read(&self, actor: &Actor) -> Result<(), DomainError> {
        self.shared.policy.authorize(
            Some(actor),
            Action::Read,
            Resource::Review {
                reviewer_id: actor.id,
                property_owner_id: None,
            },
        )
    }

    fn to_view(&self, row: ReviewJoinRow) -> ReviewView {
        let reviewer_name = row
            .reviewer_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.shared.config.anonymous_reviewer_name.clone());
        let review = row.review;
        ReviewView {
            id: review.id,
            property_id: review.property_id,
            reviewer_id: review.reviewer_id,
            rating: review.rating,
            text: review.text,
            created_at: review.created_at,
            property_title: row.property_title,
            reviewer_name,
        }
    }
}
