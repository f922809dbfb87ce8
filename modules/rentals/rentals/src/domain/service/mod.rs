//! Domain service layer - business logic and rules.
//!
//! ## Architecture
//!
//! Per-resource services, each holding its repositories, the database
//! connection, the authorization [`Policy`] and the event publisher:
//! - `profiles` - provisioning (insert-if-absent) and self-service updates
//! - `properties` - landlord-owned listings
//! - `reviews` - author-owned reviews
//! - `views` - the joined review views (reviewer, owner, property)
//! - `provisioning` - session-driven provisioner task
//!
//! Every operation receives the caller's `ActorContext` explicitly, asks the
//! policy before touching storage, and then issues at most one write.

use std::sync::Arc;

use rentals_sdk::ActorContext;
use sea_orm::DatabaseConnection;

use crate::domain::authz::{Actor, Policy};
use crate::domain::error::DomainError;
use crate::domain::events::RentalsDomainEvent;
use crate::domain::ports::EventPublisher;
use crate::domain::repos::{PropertiesRepository, ProfilesRepository, ReviewsRepository};

mod profiles;
mod properties;
pub mod provisioning;
mod reviews;
mod views;

pub use profiles::ProfilesService;
pub use properties::PropertiesService;
pub use reviews::ReviewsService;
pub use views::ReviewViewsService;

#[cfg(test)]
mod tests_validation;

/// Configuration for the domain services
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub allow_self_review: bool,
    pub anonymous_reviewer_name: String,
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub max_bio_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            allow_self_review: false,
            anonymous_reviewer_name: "Anonymous".to_owned(),
            min_name_length: 2,
            max_name_length: 50,
            max_bio_length: 200,
        }
    }
}

impl ServiceConfig {
    #[must_use]
    pub fn policy(&self) -> Policy {
        Policy::new(self.allow_self_review)
    }
}

/// Dependencies shared by every service.
#[derive(Clone)]
pub(crate) struct Shared {
    pub(crate) db: DatabaseConnection,
    pub(crate) policy: Policy,
    pub(crate) events: Arc<dyn EventPublisher<RentalsDomainEvent>>,
    pub(crate) config: ServiceConfig,
}

// DI Container - aggregates all domain services
#[derive(Clone)]
pub struct AppServices<PR, PPR, RR>
where
    PR: ProfilesRepository + 'static,
    PPR: PropertiesRepository + 'static,
    RR: ReviewsRepository + 'static,
{
    pub profiles: Arc<ProfilesService<PR>>,
    pub properties: Arc<PropertiesService<PPR, PR>>,
    pub reviews: Arc<ReviewsService<RR, PPR>>,
    pub views: Arc<ReviewViewsService<RR, PPR>>,
}

impl<PR, PPR, RR> AppServices<PR, PPR, RR>
where
    PR: ProfilesRepository + 'static,
    PPR: PropertiesRepository + 'static,
    RR: ReviewsRepository + 'static,
{
    pub fn new(
        profiles_repo: PR,
        properties_repo: PPR,
        reviews_repo: RR,
        db: DatabaseConnection,
        events: Arc<dyn EventPublisher<RentalsDomainEvent>>,
        config: ServiceConfig,
    ) -> Self {
        let shared = Shared {
            db,
            policy: config.policy(),
            events,
            config,
        };

        let profiles_repo = Arc::new(profiles_repo);
        let properties_repo = Arc::new(properties_repo);
        let reviews_repo = Arc::new(reviews_repo);

        Self {
            profiles: Arc::new(ProfilesService::new(
                Arc::clone(&profiles_repo),
                shared.clone(),
            )),
            properties: Arc::new(PropertiesService::new(
                Arc::clone(&properties_repo),
                Arc::clone(&profiles_repo),
                shared.clone(),
            )),
            reviews: Arc::new(ReviewsService::new(
                Arc::clone(&reviews_repo),
                Arc::clone(&properties_repo),
                shared.clone(),
            )),
            views: Arc::new(ReviewViewsService::new(reviews_repo, properties_repo, shared)),
        }
    }
}

fn actor_of(ctx: &ActorContext) -> Option<Actor> {
    ctx.subject_id().map(Actor::new)
}

fn require_actor(ctx: &ActorContext) -> Result<Actor, DomainError> {
    actor_of(ctx).ok_or(DomainError::Unauthenticated)
}

/// Trim, and treat blank as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn require_text(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "is required"));
    }
    Ok(trimmed.to_owned())
}
