//! Public error types for the `rentals` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;
use uuid::Uuid;

/// Why an authenticated caller was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    /// The caller's profile role does not allow the action.
    RoleMismatch,
    /// The caller does not own the property.
    NotOwner,
    /// The caller did not write the review.
    NotAuthor,
    /// The profile belongs to another identity.
    NotSelf,
    /// Owners may not review their own property.
    SelfReview,
    /// No rule grants the action.
    NotPermitted,
}

impl DenyReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RoleMismatch => "role_mismatch",
            Self::NotOwner => "not_owner",
            Self::NotAuthor => "not_author",
            Self::NotSelf => "not_self",
            Self::SelfReview => "self_review",
            Self::NotPermitted => "not_permitted",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can be returned by `RentalsClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RentalsError {
    /// The caller has no valid session.
    #[error("Authentication required")]
    Unauthenticated,

    /// The caller is authenticated but not allowed to perform the action.
    #[error("Access denied: {reason}")]
    Denied { reason: DenyReason },

    /// The entity with the specified ID was not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    /// Validation error with the provided data.
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    /// The backing store could not be reached or failed the request.
    #[error("Store unavailable")]
    StoreUnavailable,
}

impl RentalsError {
    #[must_use]
    pub fn denied(reason: DenyReason) -> Self {
        Self::Denied { reason }
    }

    #[must_use]
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Only store failures may succeed on a later attempt; retry policy is
    /// left to the caller.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable)
    }

    #[must_use]
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Denied { reason } => Some(*reason),
            _ => None,
        }
    }
}
