use async_trait::async_trait;
use rentals_sdk::Review;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// A review joined with its parent property and the reviewer's profile name.
///
/// `reviewer_name` is `None` when the reviewer has no profile or no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewJoinRow {
    pub review: Review,
    pub property_title: String,
    pub reviewer_name: Option<String>,
}

/// Repository trait for Review persistence and the joined review queries.
///
/// Joined queries inner-join the parent property, so reviews of a deleted
/// property never come back from them. Rows are ordered by `created_at`
/// descending, then `id` descending.
#[async_trait]
pub trait ReviewsRepository: Send + Sync {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Review>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        review: Review,
    ) -> Result<Review, DomainError>;

    /// Overwrite rating and text, conditioned on `review.reviewer_id` being
    /// the author. Returns `false` if nothing matched.
    async fn update_authored<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        review: &Review,
    ) -> Result<bool, DomainError>;

    /// Delete conditioned on authorship. Returns `false` if nothing matched.
    async fn delete_authored<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> Result<bool, DomainError>;

    /// Reviews by `reviewer_id` joined with their property and profile.
    async fn written_by<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        reviewer_id: Uuid,
    ) -> Result<Vec<ReviewJoinRow>, DomainError>;

    /// Reviews of every property owned by `owner_id`, joined with property
    /// and reviewer profile.
    async fn received_by<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: Uuid,
    ) -> Result<Vec<ReviewJoinRow>, DomainError>;

    /// Reviews of a single property, joined with property and reviewer profile.
    async fn for_property<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        property_id: Uuid,
    ) -> Result<Vec<ReviewJoinRow>, DomainError>;
}
