use std::sync::Arc;

use rentals_sdk::{ActorContext, Review, ReviewDraft};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::{Shared, require_actor, require_text};
use crate::domain::authz::{Action, Resource};
use crate::domain::error::DomainError;
use crate::domain::events::RentalsDomainEvent;
use crate::domain::repos::{PropertiesRepository, ReviewsRepository};

pub(crate) const MIN_RATING: i32 = 1;
pub(crate) const MAX_RATING: i32 = 5;

/// Author-owned property reviews.
pub struct ReviewsService<RR: ReviewsRepository, PPR: PropertiesRepository> {
    repo: Arc<RR>,
    properties: Arc<PPR>,
    shared: Shared,
}

impl<RR: ReviewsRepository, PPR: PropertiesRepository> ReviewsService<RR, PPR> {
    pub(crate) fn new(repo: Arc<RR>, properties: Arc<PPR>, shared: Shared) -> Self {
        Self {
            repo,
            properties,
            shared,
        }
    }

    pub async fn create_review(
        &self,
        ctx: &ActorContext,
        property_id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, DomainError> {
        let actor = require_actor(ctx)?;
        info!(property_id = %property_id, reviewer_id = %actor.id, "Creating review");

        let property = self
            .properties
            .get(&self.shared.db, property_id)
            .await?
            .ok_or_else(|| DomainError::property_not_found(property_id))?;

        self.shared.policy.authorize(
            Some(&actor),
            Action::Create,
            Resource::Review {
                reviewer_id: actor.id,
                property_owner_id: Some(property.owner_id),
            },
        )?;

        let (rating, text) = validate_draft(&draft)?;
        let review = Review {
            id: Uuid::now_v7(),
            property_id,
            reviewer_id: actor.id,
            rating,
            text,
            created_at: OffsetDateTime::now_utc(),
        };

        let created = self.repo.create(&self.shared.db, review).await?;

        self.shared.events.publish(&RentalsDomainEvent::ReviewCreated {
            id: created.id,
            property_id,
            at: created.created_at,
        });

        info!(review_id = %created.id, "Created review");
        Ok(created)
    }

    pub async fn update_review(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, DomainError> {
        let actor = require_actor(ctx)?;
        info!(review_id = %id, actor_id = %actor.id, "Updating review");

        let current = self
            .repo
            .get(&self.shared.db, id)
            .await?
            .ok_or_else(|| DomainError::review_not_found(id))?;

        self.shared.policy.authorize(
            Some(&actor),
            Action::Update,
            Resource::Review {
                reviewer_id: current.reviewer_id,
                property_owner_id: None,
            },
        )?;

        let (rating, text) = validate_draft(&draft)?;
        let updated = Review {
            rating,
            text,
            ..current
        };

        if !self.repo.update_authored(&self.shared.db, &updated).await? {
            return Err(DomainError::review_not_found(id));
        }

        self.shared.events.publish(&RentalsDomainEvent::ReviewUpdated {
            id,
            at: OffsetDateTime::now_utc(),
        });

        Ok(updated)
    }

    pub async fn delete_review(&self, ctx: &ActorContext, id: Uuid) -> Result<(), DomainError> {
        let actor = require_actor(ctx)?;
        info!(review_id = %id, actor_id = %actor.id, "Deleting review");

        let current = self
            .repo
            .get(&self.shared.db, id)
            .await?
            .ok_or_else(|| DomainError::review_not_found(id))?;

        self.shared.policy.authorize(
            Some(&actor),
            Action::Delete,
            Resource::Review {
                reviewer_id: current.reviewer_id,
                property_owner_id: None,
            },
        )?;

        if !self.repo.delete_authored(&self.shared.db, id, actor.id).await? {
            return Err(DomainError::review_not_found(id));
        }

        self.shared.events.publish(&RentalsDomainEvent::ReviewDeleted {
            id,
            at: OffsetDateTime::now_utc(),
        });

        Ok(())
    }
}

pub(crate) fn validate_draft(draft: &ReviewDraft) -> Result<(i32, String), DomainError> {
    if !(MIN_RATING..=MAX_RATING).contains(&draft.rating) {
        return Err(DomainError::validation(
            "rating",
            format!("must be between {MIN_RATING} and {MAX_RATING}"),
        ));
    }
    let text = require_text("text", &draft.text)?;
    Ok((draft.rating, text))
}
