use sea_orm::entity::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

/// `property_id` carries no foreign key: reviews outlive a deleted property
/// and are hidden by the joined queries instead.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub property_id: Uuid,
    pub reviewer_id: Uuid,
    pub rating: i32,
    pub text: String,
    pub created_at: OffsetDateTime,
    /// Ordering key, see [`super::created_at_key`].
    pub created_at_ns: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ReviewerId",
        to = "super::profile::Column::Id"
    )]
    Reviewer,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviewer.def()
    }
}
