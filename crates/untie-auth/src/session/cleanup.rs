//! Periodic removal of expired sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::registry::SessionRegistry;

/// Sweeps expired sessions out of the registry.
///
/// Lookups already reject expired sessions. The sweep only bounds memory held
/// by sessions that are never presented again.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    registry: Arc<SessionRegistry>,
}

impl SessionCleanup {
    /// Creates a new cleanup handler.
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Runs one sweep. Returns the number of sessions removed.
    pub fn run_cleanup(&self) -> usize {
        let removed = self.registry.purge_expired();
        if removed > 0 {
            info!(count = removed, "Expired sessions cleaned up");
        } else {
            debug!("No expired sessions to clean up");
        }
        removed
    }

    /// Spawns a background task that sweeps every `interval` until `shutdown` flips.
    pub fn spawn(self, interval: Duration, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            info!(interval_secs = interval.as_secs(), "Session cleanup task started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_cleanup();
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }

            info!("Session cleanup task stopped");
        })
    }
}
