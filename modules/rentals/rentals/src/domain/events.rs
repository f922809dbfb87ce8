use time::OffsetDateTime;
use uuid::Uuid;

/// Transport-agnostic domain event, published after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalsDomainEvent {
    ProfileProvisioned { id: Uuid, at: OffsetDateTime },
    ProfileUpdated { id: Uuid, at: OffsetDateTime },
    PropertyCreated { id: Uuid, owner_id: Uuid, at: OffsetDateTime },
    PropertyUpdated { id: Uuid, at: OffsetDateTime },
    PropertyDeleted { id: Uuid, at: OffsetDateTime },
    ReviewCreated { id: Uuid, property_id: Uuid, at: OffsetDateTime },
    ReviewUpdated { id: Uuid, at: OffsetDateTime },
    ReviewDeleted { id: Uuid, at: OffsetDateTime },
}
