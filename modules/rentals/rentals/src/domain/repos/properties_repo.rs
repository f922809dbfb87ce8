use async_trait::async_trait;
use rentals_sdk::Property;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for Property persistence operations.
#[async_trait]
pub trait PropertiesRepository: Send + Sync {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Property>, DomainError>;

    /// All properties owned by `owner_id`, oldest first.
    async fn list_by_owner<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: Uuid,
    ) -> Result<Vec<Property>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        property: Property,
    ) -> Result<Property, DomainError>;

    /// Overwrite the mutable columns, conditioned on `property.owner_id`
    /// still owning the row. Returns `false` if nothing matched.
    async fn update_owned<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        property: &Property,
    ) -> Result<bool, DomainError>;

    /// Delete conditioned on ownership. Returns `false` if nothing matched.
    async fn delete_owned<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<bool, DomainError>;
}
