use rentals_sdk::ActorContext;
use tokio::sync::watch;

use crate::domain::ports::IdentityProvider;

/// Identity provider backed by a watch channel. Sign-in and sign-out are
/// driven by whoever owns the session (a CLI flag, a test, an auth adapter).
pub struct StaticIdentityProvider {
    tx: watch::Sender<ActorContext>,
}

impl StaticIdentityProvider {
    #[must_use]
    pub fn new(initial: ActorContext) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::new(ActorContext::anonymous())
    }

    pub fn sign_in(&self, ctx: ActorContext) {
        self.tx.send_replace(ctx);
    }

    pub fn sign_out(&self) {
        self.tx.send_replace(ActorContext::anonymous());
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn current_actor(&self) -> ActorContext {
        self.tx.borrow().clone()
    }

    fn session_changes(&self) -> watch::Receiver<ActorContext> {
        self.tx.subscribe()
    }
}
