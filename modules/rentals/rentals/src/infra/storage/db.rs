use sea_orm::DbErr;

use crate::domain::error::DomainError;

/// Map a SeaORM error into the domain store error.
pub fn db_err(e: DbErr) -> DomainError {
    DomainError::store(e.to_string())
}
