//! Caller context passed explicitly into every rentals operation.

use uuid::Uuid;

use crate::models::{ProfileDefaults, Role};

/// Authenticated identity as issued by the identity provider.
///
/// `name` and `role` are sign-up metadata; they only seed a profile the
/// first time it is provisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

/// `ActorContext` carries who is performing an operation.
///
/// An anonymous context has no subject; every operation other than reading
/// properties rejects it with `RentalsError::Unauthenticated`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorContext {
    identity: Option<Identity>,
}

impl ActorContext {
    #[must_use]
    pub fn builder() -> ActorContextBuilder {
        ActorContextBuilder::default()
    }

    /// Context for a caller without a valid session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Subject id of the authenticated caller, `None` when anonymous.
    #[must_use]
    pub fn subject_id(&self) -> Option<Uuid> {
        self.identity.as_ref().map(|i| i.id)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().and_then(|i| i.email.as_deref())
    }

    /// Sign-up metadata to seed a freshly provisioned profile.
    #[must_use]
    pub fn signup_defaults(&self) -> ProfileDefaults {
        self.identity
            .as_ref()
            .map(|i| ProfileDefaults {
                name: i.name.clone(),
                role: i.role,
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct ActorContextBuilder {
    subject_id: Option<Uuid>,
    email: Option<String>,
    name: Option<String>,
    role: Option<Role>,
}

impl ActorContextBuilder {
    #[must_use]
    pub fn subject_id(mut self, subject_id: Uuid) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self
    }

    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Without a subject id the built context is anonymous.
    #[must_use]
    pub fn build(self) -> ActorContext {
        ActorContext {
            identity: self.subject_id.map(|id| Identity {
                id,
                email: self.email,
                name: self.name,
                role: self.role,
            }),
        }
    }
}
