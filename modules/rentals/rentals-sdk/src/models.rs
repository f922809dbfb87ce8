//! Public models for the `rentals` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `rentals` module and its consumers.

use std::fmt;
use std::str::FromStr;

use time::OffsetDateTime;
use uuid::Uuid;

/// Marketplace role of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Renter,
    Landlord,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Renter => "renter",
            Self::Landlord => "landlord",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "renter" => Ok(Self::Renter),
            "landlord" => Ok(Self::Landlord),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// One profile per identity; `id` is the identity id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub updated_at: OffsetDateTime,
}

impl Profile {
    /// Name to greet the profile owner with: profile name, then the login
    /// email, then the first 8 characters of the id.
    #[must_use]
    pub fn display_name(&self, email: Option<&str>) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            return email.to_owned();
        }
        self.id.to_string().chars().take(8).collect()
    }
}

/// Values used when a profile is provisioned for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDefaults {
    pub name: Option<String>,
    pub role: Option<Role>,
}

/// Full replacement of the self-service profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

/// A rental property owned by exactly one landlord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub address: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Data for creating a new property. The owner is always the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProperty {
    pub title: String,
    pub address: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update data for a property.
///
/// For the optional columns `Some(None)` clears the value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub address: Option<String>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}

/// A review of a property, owned by its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: Uuid,
    pub property_id: Uuid,
    pub reviewer_id: Uuid,
    pub rating: i32,
    pub text: String,
    pub created_at: OffsetDateTime,
}

/// Rating and text submitted when creating or editing a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: i32,
    pub text: String,
}

/// A review decorated with its property title and reviewer display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView {
    pub id: Uuid,
    pub property_id: Uuid,
    pub reviewer_id: Uuid,
    pub rating: i32,
    pub text: String,
    pub created_at: OffsetDateTime,
    pub property_title: String,
    pub reviewer_name: String,
}
