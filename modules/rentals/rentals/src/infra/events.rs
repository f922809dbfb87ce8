use tokio::sync::broadcast;

use crate::domain::events::RentalsDomainEvent;
use crate::domain::ports::EventPublisher;

/// Fans domain events out to in-process subscribers.
///
/// Events published with no live subscriber are dropped; a slow subscriber
/// sees `RecvError::Lagged` rather than blocking writers.
#[derive(Clone)]
pub struct BroadcastEventPublisher {
    tx: broadcast::Sender<RentalsDomainEvent>,
}

impl BroadcastEventPublisher {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RentalsDomainEvent> {
        self.tx.subscribe()
    }
}

impl EventPublisher<RentalsDomainEvent> for BroadcastEventPublisher {
    fn publish(&self, event: &RentalsDomainEvent) {
        if self.tx.send(event.clone()).is_err() {
            tracing::trace!(?event, "no event subscribers");
        }
    }
}
