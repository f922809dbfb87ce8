use std::sync::Arc;

use rentals_sdk::{ActorContext, NewProperty, Property, PropertyPatch};
use time::OffsetDateTime;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

use super::{Shared, actor_of, normalize, require_actor, require_text};
use crate::domain::authz::{Action, Resource};
use crate::domain::error::DomainError;
use crate::domain::events::RentalsDomainEvent;
use crate::domain::repos::{PropertiesRepository, ProfilesRepository};

/// Landlord-owned property listings.
pub struct PropertiesService<PPR: PropertiesRepository, PR: ProfilesRepository> {
    repo: Arc<PPR>,
    profiles: Arc<PR>,
    shared: Shared,
}

impl<PPR: PropertiesRepository, PR: ProfilesRepository> PropertiesService<PPR, PR> {
    pub(crate) fn new(repo: Arc<PPR>, profiles: Arc<PR>, shared: Shared) -> Self {
        Self {
            repo,
            profiles,
            shared,
        }
    }

    /// Properties are public; anonymous callers may read them.
    pub async fn get_property(&self, ctx: &ActorContext, id: Uuid) -> Result<Property, DomainError> {
        debug!(property_id = %id, "Getting property");

        let property = self
            .repo
            .get(&self.shared.db, id)
            .await?
            .ok_or_else(|| DomainError::property_not_found(id))?;

        self.shared.policy.authorize(
            actor_of(ctx).as_ref(),
            Action::Read,
            Resource::Property {
                owner_id: property.owner_id,
            },
        )?;

        Ok(property)
    }

    pub async fn list_properties_by_owner(
        &self,
        ctx: &ActorContext,
        owner_id: Uuid,
    ) -> Result<Vec<Property>, DomainError> {
        self.shared.policy.authorize(
            actor_of(ctx).as_ref(),
            Action::Read,
            Resource::Property { owner_id },
        )?;

        let properties = self.repo.list_by_owner(&self.shared.db, owner_id).await?;
        debug!(owner_id = %owner_id, count = properties.len(), "Listed properties");
        Ok(properties)
    }

    /// Create a property owned by the caller. Requires the landlord role on
    /// the caller's profile; a caller without a profile has no role.
    pub async fn create_property(
        &self,
        ctx: &ActorContext,
        new_property: NewProperty,
    ) -> Result<Property, DomainError> {
        let actor = require_actor(ctx)?;
        let role = self
            .profiles
            .get(&self.shared.db, actor.id)
            .await?
            .and_then(|p| p.role);
        let actor = actor.with_role(role);

        self.shared.policy.authorize(
            Some(&actor),
            Action::Create,
            Resource::Property { owner_id: actor.id },
        )?;

        let property = Property {
            id: Uuid::now_v7(),
            owner_id: actor.id,
            title: require_text("title", &new_property.title)?,
            address: require_text("address", &new_property.address)?,
            description: normalize(new_property.description),
            image_url: validate_image_url(new_property.image_url)?,
        };

        let created = self.repo.create(&self.shared.db, property).await?;

        self.shared.events.publish(&RentalsDomainEvent::PropertyCreated {
            id: created.id,
            owner_id: created.owner_id,
            at: OffsetDateTime::now_utc(),
        });

        info!(property_id = %created.id, owner_id = %created.owner_id, "Created property");
        Ok(created)
    }

    pub async fn update_property(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        patch: PropertyPatch,
    ) -> Result<Property, DomainError> {
        let actor = require_actor(ctx)?;
        info!(property_id = %id, actor_id = %actor.id, "Updating property");

        let mut current = self
            .repo
            .get(&self.shared.db, id)
            .await?
            .ok_or_else(|| DomainError::property_not_found(id))?;

        self.shared.policy.authorize(
            Some(&actor),
            Action::Update,
            Resource::Property {
                owner_id: current.owner_id,
            },
        )?;

        if let Some(title) = patch.title {
            current.title = require_text("title", &title)?;
        }
        if let Some(address) = patch.address {
            current.address = require_text("address", &address)?;
        }
        if let Some(description) = patch.description {
            current.description = normalize(description);
        }
        if let Some(image_url) = patch.image_url {
            current.image_url = validate_image_url(image_url)?;
        }

        // The row may have been deleted since it was read.
        if !self.repo.update_owned(&self.shared.db, &current).await? {
            return Err(DomainError::property_not_found(id));
        }

        self.shared.events.publish(&RentalsDomainEvent::PropertyUpdated {
            id,
            at: OffsetDateTime::now_utc(),
        });

        info!(property_id = %id, "Successfully updated property");
        Ok(current)
    }

    /// Delete an owned property. Its reviews stay in storage and drop out of
    /// every joined view.
    pub async fn delete_property(&self, ctx: &ActorContext, id: Uuid) -> Result<(), DomainError> {
        let actor = require_actor(ctx)?;
        info!(property_id = %id, actor_id = %actor.id, "Deleting property");

        let current = self
            .repo
            .get(&self.shared.db, id)
            .await?
            .ok_or_else(|| DomainError::property_not_found(id))?;

        self.shared.policy.authorize(
            Some(&actor),
            Action::Delete,
            Resource::Property {
                owner_id: current.owner_id,
            },
        )?;

        if !self.repo.delete_owned(&self.shared.db, id, actor.id).await? {
            return Err(DomainError::property_not_found(id));
        }

        self.shared.events.publish(&RentalsDomainEvent::PropertyDeleted {
            id,
            at: OffsetDateTime::now_utc(),
        });

        info!(property_id = %id, "Successfully deleted property");
        Ok(())
    }
}

pub(super) fn validate_image_url(value: Option<String>) -> Result<Option<String>, DomainError> {
    let Some(raw) = normalize(value) else {
        return Ok(None);
    };
    Url::parse(&raw).map_err(|e| DomainError::validation("image_url", e.to_string()))?;
    Ok(Some(raw))
}
