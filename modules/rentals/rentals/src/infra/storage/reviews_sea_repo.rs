use async_trait::async_trait;
use rentals_sdk::Review;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::{ReviewJoinRow, ReviewsRepository};
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::review::{
    ActiveModel as ReviewAM, Column, Entity as ReviewEntity, Relation,
};
use crate::infra::storage::entity::{created_at_key, profile, property};

/// ORM-based implementation of the `ReviewsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmReviewsRepository;

impl OrmReviewsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Flat row of the review / property / profile join.
#[derive(Debug, FromQueryResult)]
struct ReviewJoinModel {
    id: Uuid,
    property_id: Uuid,
    reviewer_id: Uuid,
    rating: i32,
    text: String,
    created_at: OffsetDateTime,
    property_title: String,
    reviewer_name: Option<String>,
}

impl From<ReviewJoinModel> for ReviewJoinRow {
    fn from(m: ReviewJoinModel) -> Self {
        Self {
            review: Review {
                id: m.id,
                property_id: m.property_id,
                reviewer_id: m.reviewer_id,
                rating: m.rating,
                text: m.text,
                created_at: m.created_at,
            },
            property_title: m.property_title,
            reviewer_name: m.reviewer_name,
        }
    }
}

// Inner join on the property hides reviews whose property is gone; the left
// join on the profile keeps reviews by identities without a profile.
fn joined() -> Select<ReviewEntity> {
    ReviewEntity::find()
        .select_only()
        .columns([
            Column::Id,
            Column::PropertyId,
            Column::ReviewerId,
            Column::Rating,
            Column::Text,
            Column::CreatedAt,
        ])
        .column_as(property::Column::Title, "property_title")
        .column_as(profile::Column::Name, "reviewer_name")
        .join(JoinType::InnerJoin, Relation::Property.def())
        .join(JoinType::LeftJoin, Relation::Reviewer.def())
}

async fn load<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    select: Select<ReviewEntity>,
) -> Result<Vec<ReviewJoinRow>, DomainError> {
    let rows = select
        .order_by_desc(Column::CreatedAtNs)
        .order_by_desc(Column::Id)
        .into_model::<ReviewJoinModel>()
        .all(conn)
        .await
        .map_err(db_err)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

#[async_trait]
impl ReviewsRepository for OrmReviewsRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Review>, DomainError> {
        let found = ReviewEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        review: Review,
    ) -> Result<Review, DomainError> {
        let m = ReviewAM {
            id: Set(review.id),
            property_id: Set(review.property_id),
            reviewer_id: Set(review.reviewer_id),
            rating: Set(review.rating),
            text: Set(review.text),
            created_at: Set(review.created_at),
            created_at_ns: Set(created_at_key(review.created_at)),
        };

        let inserted = m.insert(conn).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update_authored<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        review: &Review,
    ) -> Result<bool, DomainError> {
        let result = ReviewEntity::update_many()
            .col_expr(Column::Rating, Expr::value(review.rating))
            .col_expr(Column::Text, Expr::value(review.text.clone()))
            .filter(Column::Id.eq(review.id))
            .filter(Column::ReviewerId.eq(review.reviewer_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_authored<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        reviewer_id: Uuid,
    ) -> Result<bool, DomainError> {
        let result = ReviewEntity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::ReviewerId.eq(reviewer_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn written_by<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        reviewer_id: Uuid,
    ) -> Result<Vec<ReviewJoinRow>, DomainError> {
        load(conn, joined().filter(Column::ReviewerId.eq(reviewer_id))).await
    }

    async fn received_by<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: Uuid,
    ) -> Result<Vec<ReviewJoinRow>, DomainError> {
        load(conn, joined().filter(property::Column::OwnerId.eq(owner_id))).await
    }

    async fn for_property<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        property_id: Uuid,
    ) -> Result<Vec<ReviewJoinRow>, DomainError> {
        load(conn, joined().filter(Column::PropertyId.eq(property_id))).await
    }
}
