//! Optional background reaper for expired sessions.
//!
//! Expiry is always enforced lazily by the verifier. The sweeper only bounds
//! memory held by tokens that are never presented again; it does not change
//! what any caller observes.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::infra::TokenRegistry;

/// Spawn a task that removes expired sessions every `every`.
///
/// The task runs until the returned handle is aborted.
pub fn spawn_sweeper(
    registry: Arc<TokenRegistry>,
    lifetime: chrono::Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = registry.sweep(lifetime);
            if removed > 0 {
                tracing::debug!(removed, remaining = registry.len(), "Swept expired sessions");
            }
        }
    })
}
