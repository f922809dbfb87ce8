use rentals_sdk::{DenyReason, RentalsError};
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Access denied: {reason}")]
    Denied { reason: DenyReason },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Store error: {message}")]
    Store { message: String },
}

impl DomainError {
    pub fn denied(reason: DenyReason) -> Self {
        Self::Denied { reason }
    }

    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn profile_not_found(id: Uuid) -> Self {
        Self::not_found("Profile", id)
    }

    pub fn property_not_found(id: Uuid) -> Self {
        Self::not_found("Property", id)
    }

    pub fn review_not_found(id: Uuid) -> Self {
        Self::not_found("Review", id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for RentalsError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::Unauthenticated => RentalsError::Unauthenticated,
            DomainError::Denied { reason } => RentalsError::denied(reason),
            DomainError::NotFound { entity, id } => RentalsError::not_found(entity, id),
            DomainError::Validation { field, message } => RentalsError::validation(field, message),
            DomainError::Store { message } => {
                tracing::error!(error = %message, "rentals store failure");
                RentalsError::StoreUnavailable
            }
        }
    }
}
