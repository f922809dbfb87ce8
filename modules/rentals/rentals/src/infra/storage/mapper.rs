use rentals_sdk::{Profile, Property, Review, Role};

use crate::infra::storage::entity::role::RoleDb;
use crate::infra::storage::entity::{profile, property, review};

impl From<RoleDb> for Role {
    fn from(r: RoleDb) -> Self {
        match r {
            RoleDb::Renter => Self::Renter,
            RoleDb::Landlord => Self::Landlord,
        }
    }
}

impl From<Role> for RoleDb {
    fn from(r: Role) -> Self {
        match r {
            Role::Renter => Self::Renter,
            Role::Landlord => Self::Landlord,
        }
    }
}

impl From<profile::Model> for Profile {
    fn from(e: profile::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
            role: e.role.map(Into::into),
            phone: e.phone,
            bio: e.bio,
            updated_at: e.updated_at,
        }
    }
}

impl From<property::Model> for Property {
    fn from(e: property::Model) -> Self {
        Self {
            id: e.id,
            owner_id: e.owner_id,
            title: e.title,
            address: e.address,
            description: e.description,
            image_url: e.image_url,
        }
    }
}

impl From<review::Model> for Review {
    fn from(e: review::Model) -> Self {
        Self {
            id: e.id,
            property_id: e.property_id,
            reviewer_id: e.reviewer_id,
            rating: e.rating,
            text: e.text,
            created_at: e.created_at,
        }
    }
}
