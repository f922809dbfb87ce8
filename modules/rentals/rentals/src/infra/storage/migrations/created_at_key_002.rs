use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

// SQLite keeps timestamps as RFC 3339 text with a variable-width fraction,
// which does not sort chronologically. Listings order on `created_at_ns`
// (Unix nanoseconds) instead.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use sea_orm::DatabaseBackend as DB;

        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        for table in ["reviews", "properties"] {
            if manager.has_column(table, "created_at_ns").await? {
                continue;
            }

            let (add, backfill) = match backend {
                DB::Postgres => (
                    format!("ALTER TABLE {table} ADD COLUMN created_at_ns BIGINT NOT NULL DEFAULT 0"),
                    format!(
                        "UPDATE {table} SET created_at_ns = \
                         (EXTRACT(EPOCH FROM created_at) * 1000000)::BIGINT * 1000"
                    ),
                ),
                DB::Sqlite => (
                    format!("ALTER TABLE {table} ADD COLUMN created_at_ns INTEGER NOT NULL DEFAULT 0"),
                    // Millisecond precision is the best julianday() offers.
                    format!(
                        "UPDATE {table} SET created_at_ns = \
                         CAST(ROUND((julianday(created_at) - 2440587.5) * 86400000) AS INTEGER) * 1000000"
                    ),
                ),
                DB::MySql => {
                    return Err(DbErr::Migration(
                        "MySQL is not a supported backend for rentals".to_owned(),
                    ));
                }
            };

            conn.execute_unprepared(&add).await?;
            conn.execute_unprepared(&backfill).await?;
        }

        conn.execute_unprepared(
            "DROP INDEX IF EXISTS idx_reviews_created_at;
CREATE INDEX IF NOT EXISTS idx_reviews_created_at_ns ON reviews(created_at_ns DESC, id DESC);
CREATE INDEX IF NOT EXISTS idx_properties_owner_created ON properties(owner_id, created_at_ns, id);",
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared(
            "DROP INDEX IF EXISTS idx_properties_owner_created;
DROP INDEX IF EXISTS idx_reviews_created_at_ns;
ALTER TABLE properties DROP COLUMN created_at_ns;
ALTER TABLE reviews DROP COLUMN created_at_ns;
CREATE INDEX IF NOT EXISTS idx_reviews_created_at ON reviews(created_at DESC, id DESC);",
        )
        .await?;
        Ok(())
    }
}
