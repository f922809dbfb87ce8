//! Authorization layer.
//!
//! [`Policy::can_perform`] is a pure decision over `(actor, action, resource)`.
//! Services resolve whatever the rules need (the actor's role, the owner of a
//! property, the author of a review) before asking, then issue a single write.
//!
//! Rules, first match wins:
//! 1. anonymous actors may only read properties;
//! 2. a profile is read and written only by its own identity;
//! 3. creating a property requires the `landlord` role;
//! 4. updating or deleting a property requires ownership;
//! 5. any authenticated actor may review an existing property (owners only
//!    when self-review is enabled);
//! 6. updating or deleting a review requires authorship;
//! 7. any authenticated actor may read properties and reviews.
//!
//! Everything else is denied.

use rentals_sdk::{DenyReason, Role};
use uuid::Uuid;

use super::error::DomainError;

/// Authenticated caller as seen by the rules.
///
/// `role` is `None` when the actor has no profile or never picked a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Option<Role>,
}

impl Actor {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self { id, role: None }
    }

    #[must_use]
    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

/// What the action targets, reduced to the columns the rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile {
        id: Uuid,
    },
    Property {
        owner_id: Uuid,
    },
    /// `property_owner_id` is `None` when the parent property does not exist.
    Review {
        reviewer_id: Uuid,
        property_owner_id: Option<Uuid>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Unauthenticated,
    Deny(DenyReason),
}

impl Decision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Turn a refusal into the matching domain error.
    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            Self::Allow => Ok(()),
            Self::Unauthenticated => Err(DomainError::Unauthenticated),
            Self::Deny(reason) => Err(DomainError::denied(reason)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    pub allow_self_review: bool,
}

impl Policy {
    #[must_use]
    pub fn new(allow_self_review: bool) -> Self {
        Self { allow_self_review }
    }

    #[must_use]
    pub fn can_perform(&self, actor: Option<&Actor>, action: Action, resource: Resource) -> Decision {
        let Some(actor) = actor else {
            return match (action, resource) {
                (Action::Read, Resource::Property { .. }) => Decision::Allow,
                _ => Decision::Unauthenticated,
            };
        };

        match (action, resource) {
            (Action::Read | Action::Create | Action::Update, Resource::Profile { id }) => {
                allow_if(actor.id == id, DenyReason::NotSelf)
            }
            (Action::Create, Resource::Property { .. }) => match actor.role {
                Some(Role::Landlord) => Decision::Allow,
                Some(Role::Renter) | None => Decision::Deny(DenyReason::RoleMismatch),
            },
            (Action::Update | Action::Delete, Resource::Property { owner_id }) => {
                allow_if(actor.id == owner_id, DenyReason::NotOwner)
            }
            (
                Action::Create,
                Resource::Review {
                    property_owner_id, ..
                },
            ) => match property_owner_id {
                None => Decision::Deny(DenyReason::NotPermitted),
                Some(owner_id) if owner_id == actor.id && !self.allow_self_review => {
                    Decision::Deny(DenyReason::SelfReview)
                }
                Some(_) => Decision::Allow,
            },
            (Action::Update | Action::Delete, Resource::Review { reviewer_id, .. }) => {
                allow_if(actor.id == reviewer_id, DenyReason::NotAuthor)
            }
            (Action::Read, Resource::Property { .. } | Resource::Review { .. }) => Decision::Allow,
            (Action::Delete, Resource::Profile { .. }) => Decision::Deny(DenyReason::NotPermitted),
        }
    }

    /// Shorthand for services: decide and convert a refusal into an error.
    pub fn authorize(
        &self,
        actor: Option<&Actor>,
        action: Action,
        resource: Resource,
    ) -> Result<(), DomainError> {
        let decision = self.can_perform(actor, action, resource);
        if !decision.is_allowed() {
            tracing::debug!(?action, ?resource, ?decision, "authorization refused");
        }
        decision.into_result()
    }
}

fn allow_if(cond: bool, reason: DenyReason) -> Decision {
    if cond {
        Decision::Allow
    } else {
        Decision::Deny(reason)
    }
}
