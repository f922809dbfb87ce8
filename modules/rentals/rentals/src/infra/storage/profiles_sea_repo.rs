use async_trait::async_trait;
use rentals_sdk::Profile;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::ProfilesRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::profile::{
    ActiveModel as ProfileAM, Column, Entity as ProfileEntity,
};

/// ORM-based implementation of the `ProfilesRepository` trait.
#[derive(Clone, Default)]
pub struct OrmProfilesRepository;

impl OrmProfilesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn active_model(p: &Profile) -> ProfileAM {
    ProfileAM {
        id: Set(p.id),
        name: Set(p.name.clone()),
        role: Set(p.role.map(Into::into)),
        phone: Set(p.phone.clone()),
        bio: Set(p.bio.clone()),
        updated_at: Set(p.updated_at),
    }
}

#[async_trait]
impl ProfilesRepository for OrmProfilesRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Profile>, DomainError> {
        let found = ProfileEntity::find_by_id(id)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn insert_if_absent<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        profile: Profile,
    ) -> Result<bool, DomainError> {
        let inserted = ProfileEntity::insert(active_model(&profile))
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(conn)
            .await
            .map_err(db_err)?;
        Ok(inserted > 0)
    }

    async fn upsert<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        profile: Profile,
    ) -> Result<Profile, DomainError> {
        ProfileEntity::insert(active_model(&profile))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::Role,
                        Column::Phone,
                        Column::Bio,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await
            .map_err(db_err)?;
        Ok(profile)
    }
}
