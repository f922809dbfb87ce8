use std::sync::Arc;

use rentals_sdk::{ActorContext, Profile, ProfileDefaults, ProfileFields, Role};
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{Shared, actor_of, normalize};
use crate::domain::authz::{Action, Resource};
use crate::domain::error::DomainError;
use crate::domain::events::RentalsDomainEvent;
use crate::domain::repos::ProfilesRepository;

/// Profile provisioning and self-service updates.
pub struct ProfilesService<PR: ProfilesRepository> {
    repo: Arc<PR>,
    shared: Shared,
}

impl<PR: ProfilesRepository> ProfilesService<PR> {
    pub(crate) fn new(repo: Arc<PR>, shared: Shared) -> Self {
        Self { repo, shared }
    }

    /// Return the caller's profile, creating it if this is the first call for
    /// the identity.
    ///
    /// The create path is a single insert-if-absent, so concurrent calls for
    /// one identity end up with exactly one row and all return it. Store
    /// errors are returned as-is; no retry happens here.
    pub async fn ensure_profile(
        &self,
        ctx: &ActorContext,
        defaults: Option<ProfileDefaults>,
    ) -> Result<Profile, DomainError> {
        let id = ctx.subject_id().ok_or(DomainError::Unauthenticated)?;

        if let Some(existing) = self.repo.get(&self.shared.db, id).await? {
            debug!(profile_id = %id, "Profile already provisioned");
            return Ok(existing);
        }

        let defaults = defaults.unwrap_or_default();
        // A sign-up name outside the length bounds is dropped; the profile is
        // still created and the name can be set later through upsert.
        let name = self.validate_name(defaults.name).unwrap_or_else(|e| {
            warn!(profile_id = %id, error = %e, "Ignoring invalid sign-up name");
            None
        });
        let profile = Profile {
            id,
            name,
            role: Some(defaults.role.unwrap_or(Role::Renter)),
            phone: None,
            bio: None,
            updated_at: OffsetDateTime::now_utc(),
        };

        let created = self.repo.insert_if_absent(&self.shared.db, profile).await?;

        let stored = self
            .repo
            .get(&self.shared.db, id)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(id))?;

        if created {
            self.shared
                .events
                .publish(&RentalsDomainEvent::ProfileProvisioned {
                    id,
                    at: stored.updated_at,
                });
            info!(profile_id = %id, role = ?stored.role, "Provisioned profile");
        } else {
            debug!(profile_id = %id, "Profile was provisioned concurrently");
        }

        Ok(stored)
    }

    pub async fn get_profile(&self, ctx: &ActorContext, id: Uuid) -> Result<Profile, DomainError> {
        debug!(profile_id = %id, "Getting profile");

        self.shared
            .policy
            .authorize(actor_of(ctx).as_ref(), Action::Read, Resource::Profile { id })?;

        self.repo
            .get(&self.shared.db, id)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(id))
    }

    /// Replace name, phone and bio; `role` is only changed when provided.
    pub async fn upsert_profile(
        &self,
        ctx: &ActorContext,
        id: Uuid,
        fields: ProfileFields,
    ) -> Result<Profile, DomainError> {
        info!(profile_id = %id, "Upserting profile");

        self.shared
            .policy
            .authorize(actor_of(ctx).as_ref(), Action::Update, Resource::Profile { id })?;

        let name = self.validate_name(fields.name)?;
        let bio = self.validate_bio(fields.bio)?;

        let role = match fields.role {
            Some(role) => Some(role),
            None => self
                .repo
                .get(&self.shared.db, id)
                .await?
                .and_then(|p| p.role),
        };

        let profile = Profile {
            id,
            name,
            role,
            phone: normalize(fields.phone),
            bio,
            updated_at: OffsetDateTime::now_utc(),
        };

        let saved = self.repo.upsert(&self.shared.db, profile).await?;

        self.shared.events.publish(&RentalsDomainEvent::ProfileUpdated {
            id,
            at: saved.updated_at,
        });

        info!(profile_id = %id, "Successfully upserted profile");
        Ok(saved)
    }

    pub(crate) fn validate_name(&self, name: Option<String>) -> Result<Option<String>, DomainError> {
        let Some(name) = normalize(name) else {
            return Ok(None);
        };
        let len = name.chars().count();
        let cfg = &self.shared.config;
        if len < cfg.min_name_length {
            return Err(DomainError::validation(
                "name",
                format!("must be at least {} characters", cfg.min_name_length),
            ));
        }
        if len > cfg.max_name_length {
            return Err(DomainError::validation(
                "name",
                format!("must be at most {} characters", cfg.max_name_length),
            ));
        }
        Ok(Some(name))
    }

    fn validate_bio(&self, bio: Option<String>) -> Result<Option<String>, DomainError> {
        let bio = normalize(bio);
        if let Some(ref text) = bio {
            let max = self.shared.config.max_bio_length;
            if text.chars().count() > max {
                return Err(DomainError::validation(
                    "bio",
                    format!("must be at most {max} characters"),
                ));
            }
        }
        Ok(bio)
    }
}
