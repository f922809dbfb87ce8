use async_trait::async_trait;
use rentals_sdk::Property;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::PropertiesRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::created_at_key;
use crate::infra::storage::entity::property::{
    ActiveModel as PropertyAM, Column, Entity as PropertyEntity,
};

/// ORM-based implementation of the `PropertiesRepository` trait.
#[derive(Clone, Default)]
pub struct OrmPropertiesRepository;

impl OrmPropertiesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PropertiesRepository for OrmPropertiesRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Property>, DomainError> {
        let found = PropertyEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_by_owner<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        owner_id: Uuid,
    ) -> Result<Vec<Property>, DomainError> {
        let rows = PropertyEntity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_asc(Column::CreatedAtNs)
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        property: Property,
    ) -> Result<Property, DomainError> {
        let now = OffsetDateTime::now_utc();
        let m = PropertyAM {
            id: Set(property.id),
            owner_id: Set(property.owner_id),
            title: Set(property.title),
            address: Set(property.address),
            description: Set(property.description),
            image_url: Set(property.image_url),
            created_at: Set(now),
            created_at_ns: Set(created_at_key(now)),
        };

        let inserted = m.insert(conn).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update_owned<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        property: &Property,
    ) -> Result<bool, DomainError> {
        let result = PropertyEntity::update_many()
            .col_expr(Column::Title, Expr::value(property.title.clone()))
            .col_expr(Column::Address, Expr::value(property.address.clone()))
            .col_expr(Column::Description, Expr::value(property.description.clone()))
            .col_expr(Column::ImageUrl, Expr::value(property.image_url.clone()))
            .filter(Column::Id.eq(property.id))
            .filter(Column::OwnerId.eq(property.owner_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_owned<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<bool, DomainError> {
        let result = PropertyEntity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::OwnerId.eq(owner_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }
}
