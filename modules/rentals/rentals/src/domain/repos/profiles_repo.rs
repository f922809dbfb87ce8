use async_trait::async_trait;
use rentals_sdk::Profile;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for Profile persistence operations.
///
/// All methods accept a generic connection (`DatabaseConnection` or
/// `DatabaseTransaction`). Authorization happens in the service layer.
#[async_trait]
pub trait ProfilesRepository: Send + Sync {
    /// Find a profile by identity id.
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Profile>, DomainError>;

    /// Insert the profile unless a row with the same id exists, as a single
    /// conditional statement. Returns `true` when this call created the row.
    async fn insert_if_absent<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        profile: Profile,
    ) -> Result<bool, DomainError>;

    /// Insert or fully overwrite the self-service fields of a profile.
    async fn upsert<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        profile: Profile,
    ) -> Result<Profile, DomainError>;
}
