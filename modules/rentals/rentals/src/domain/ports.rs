//! Outbound ports of the domain layer.

use rentals_sdk::ActorContext;
use tokio::sync::watch;

/// Sink for domain events. Publishing never fails the operation that
/// produced the event.
pub trait EventPublisher<E>: Send + Sync {
    fn publish(&self, event: &E);
}

/// Source of the current session, owned by the external identity provider.
///
/// Session changes are a signal to re-check preconditions; they are not
/// part of the core's own state.
pub trait IdentityProvider: Send + Sync {
    /// Snapshot of the current caller; anonymous when signed out.
    fn current_actor(&self) -> ActorContext;

    /// Stream of session changes.
    fn session_changes(&self) -> watch::Receiver<ActorContext>;
}
