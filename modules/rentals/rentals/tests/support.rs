#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `rentals` integration tests.
//!
//! Provides helpers for building actor contexts, test databases, wired
//! services, and seeding rows directly.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::sync::Arc;

use parking_lot::Mutex;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use time::OffsetDateTime;
use uuid::Uuid;

use rentals::domain::events::RentalsDomainEvent;
use rentals::domain::ports::EventPublisher;
use rentals::domain::service::{AppServices, ServiceConfig};
use rentals::infra::storage::entity::{created_at_key, profile, property, review};
use rentals::infra::storage::{
    OrmProfilesRepository, OrmPropertiesRepository, OrmReviewsRepository,
};
use rentals_sdk::{ActorContext, Role};

pub type TestServices =
    AppServices<OrmProfilesRepository, OrmPropertiesRepository, OrmReviewsRepository>;

/// Context for a signed-in identity with no sign-up metadata.
#[must_use]
pub fn ctx(id: Uuid) -> ActorContext {
    ActorContext::builder().subject_id(id).build()
}

/// Context for a signed-in identity carrying sign-up metadata.
#[must_use]
pub fn ctx_signup(id: Uuid, name: &str, role: Role) -> ActorContext {
    ActorContext::builder()
        .subject_id(id)
        .email(&format!("{name}@example.com"))
        .name(name)
        .role(role)
        .build()
}

#[must_use]
pub fn anonymous() -> ActorContext {
    ActorContext::anonymous()
}

/// Fixed instant offset by `secs` seconds, for deterministic ordering.
#[must_use]
pub fn ts(secs: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000 + secs).unwrap()
}

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    rentals::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a file-backed `SQLite` database in `dir` with a multi-connection
/// pool, so concurrent callers really hit the database in parallel.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn file_db(dir: &tempfile::TempDir, max_connections: u32) -> DatabaseConnection {
    let path = dir.path().join("rentals.db");
    let mut opts = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    opts.max_connections(max_connections)
        .min_connections(max_connections)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to file database");

    rentals::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Wire services over `db` with a recording publisher.
pub fn services_with(
    db: &DatabaseConnection,
    config: ServiceConfig,
) -> (TestServices, Arc<RecordingEventPublisher>) {
    let events = Arc::new(RecordingEventPublisher::default());
    let publisher: Arc<dyn EventPublisher<RentalsDomainEvent>> = events.clone();
    let services = AppServices::new(
        OrmProfilesRepository::new(),
        OrmPropertiesRepository::new(),
        OrmReviewsRepository::new(),
        db.clone(),
        publisher,
        config,
    );
    (services, events)
}

pub fn services(db: &DatabaseConnection) -> (TestServices, Arc<RecordingEventPublisher>) {
    services_with(db, ServiceConfig::default())
}

/// Seed a profile row directly.
///
/// # Panics
/// Panics if the insert fails.
pub async fn seed_profile(
    db: &DatabaseConnection,
    id: Uuid,
    name: Option<&str>,
    role: Option<Role>,
) {
    profile::ActiveModel {
        id: Set(id),
        name: Set(name.map(str::to_owned)),
        role: Set(role.map(Into::into)),
        phone: Set(None),
        bio: Set(None),
        updated_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(db)
    .await
    .expect("seed profile");
}

/// Seed a property owned by `owner_id` (whose profile must exist).
///
/// # Panics
/// Panics if the insert fails.
pub async fn seed_property(db: &DatabaseConnection, owner_id: Uuid, title: &str) -> Uuid {
    let id = Uuid::now_v7();
    let now = OffsetDateTime::now_utc();
    property::ActiveModel {
        id: Set(id),
        owner_id: Set(owner_id),
        title: Set(title.to_owned()),
        address: Set(format!("1 {title} Street")),
        description: Set(None),
        image_url: Set(None),
        created_at: Set(now),
        created_at_ns: Set(created_at_key(now)),
    }
    .insert(db)
    .await
    .expect("seed property");
    id
}

/// Seed a review with an explicit `created_at`.
///
/// # Panics
/// Panics if the insert fails.
pub async fn seed_review(
    db: &DatabaseConnection,
    property_id: Uuid,
    reviewer_id: Uuid,
    rating: i32,
    created_at: OffsetDateTime,
) -> Uuid {
    seed_review_with_id(db, Uuid::now_v7(), property_id, reviewer_id, rating, created_at).await
}

/// # Panics
/// Panics if the insert fails.
pub async fn seed_review_with_id(
    db: &DatabaseConnection,
    id: Uuid,
    property_id: Uuid,
    reviewer_id: Uuid,
    rating: i32,
    created_at: OffsetDateTime,
) -> Uuid {
    review::ActiveModel {
        id: Set(id),
        property_id: Set(property_id),
        reviewer_id: Set(reviewer_id),
        rating: Set(rating),
        text: Set(format!("{rating} stars")),
        created_at: Set(created_at),
        created_at_ns: Set(created_at_key(created_at)),
    }
    .insert(db)
    .await
    .expect("seed review");
    id
}

/// Event publisher that records everything it is given.
#[derive(Default)]
pub struct RecordingEventPublisher {
    events: Mutex<Vec<RentalsDomainEvent>>,
}

impl RecordingEventPublisher {
    pub fn events(&self) -> Vec<RentalsDomainEvent> {
        self.events.lock().clone()
    }

    pub fn count<F: Fn(&RentalsDomainEvent) -> bool>(&self, pred: F) -> usize {
        self.events.lock().iter().filter(|e| pred(e)).count()
    }
}

impl EventPublisher<RentalsDomainEvent> for RecordingEventPublisher {
    fn publish(&self, event: &RentalsDomainEvent) {
        self.events.lock().push(event.clone());
    }
}
