//! Session-driven profile provisioning.
//!
//! The identity provider owns the session. Whenever it reports a signed-in
//! identity, the provisioner calls `ensure_profile` once with the sign-up
//! defaults carried in the session. Failures are logged and left for the
//! next session change; nothing retries in a loop.

use std::sync::Arc;

use rentals_sdk::ActorContext;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::ProfilesService;
use crate::domain::repos::ProfilesRepository;

/// Run until `cancel` fires or the session sender is dropped.
pub async fn run_provisioner<PR>(
    profiles: Arc<ProfilesService<PR>>,
    mut sessions: watch::Receiver<ActorContext>,
    cancel: CancellationToken,
) where
    PR: ProfilesRepository + 'static,
{
    info!("Profile provisioner started");

    loop {
        let ctx = sessions.borrow_and_update().clone();
        if ctx.is_authenticated() {
            provision_once(&profiles, &ctx).await;
        }

        tokio::select! {
            () = cancel.cancelled() => break,
            changed = sessions.changed() => {
                if changed.is_err() {
                    debug!("Session source closed");
                    break;
                }
            }
        }
    }

    info!("Profile provisioner stopped");
}

async fn provision_once<PR: ProfilesRepository>(profiles: &ProfilesService<PR>, ctx: &ActorContext) {
    match profiles.ensure_profile(ctx, Some(ctx.signup_defaults())).await {
        Ok(profile) => debug!(profile_id = %profile.id, "Session profile ready"),
        Err(e) => warn!(
            subject_id = ?ctx.subject_id(),
            error = %e,
            "Profile provisioning failed; waiting for the next session change"
        ),
    }
}
