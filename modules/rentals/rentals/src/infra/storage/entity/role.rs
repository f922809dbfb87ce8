use sea_orm::entity::prelude::*;

/// Stored form of [`rentals_sdk::Role`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RoleDb {
    #[sea_orm(string_value = "renter")]
    Renter,
    #[sea_orm(string_value = "landlord")]
    Landlord,
}
