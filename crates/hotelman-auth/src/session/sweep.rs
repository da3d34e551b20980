//! Periodic removal of expired session entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use hotelman_core::config::session::SessionConfig;

use super::cache::SessionCache;

/// Drives [`SessionCache::purge_expired`] on a fixed interval.
///
/// Expired entries are also replaced lazily on login; the sweep bounds
/// how long a stale entry for an inactive principal can linger.
#[derive(Clone)]
pub struct SessionSweeper {
    /// The cache to sweep.
    cache: Arc<SessionCache>,
    /// Time between sweeps.
    interval: Duration,
}

impl std::fmt::Debug for SessionSweeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSweeper")
            .field("interval", &self.interval)
            .finish()
    }
}

impl SessionSweeper {
    /// Creates a sweeper from session configuration.
    pub fn new(cache: Arc<SessionCache>, config: &SessionConfig) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(config.sweep_interval_seconds),
        }
    }

    /// Runs until the shutdown signal flips.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = self.cache.purge_expired();
                    if removed > 0 {
                        info!(removed, "Swept expired sessions");
                    }
                }
                _ = shutdown.changed() => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use uuid::Uuid;

    use hotelman_core::types::Role;

    use crate::session::cache::SessionEntry;
    use crate::token::SessionClaims;

    fn seed(cache: &SessionCache, principal: &str, ttl_seconds: i64) {
        let now = Utc::now().timestamp();
        cache
            .get_or_create(principal, || {
                Ok(SessionEntry {
                    token: format!("token-{principal}"),
                    claims: SessionClaims {
                        sub: principal.to_string(),
                        role: Role::Receptionist,
                        sid: Uuid::new_v4(),
                        iat: now,
                        exp: now + ttl_seconds,
                    },
                })
            })
            .unwrap();
    }

    #[tokio::test]
    async fn sweep_stops_on_shutdown() {
        let cache = Arc::new(SessionCache::new());
        seed(&cache, "stale@example.com", -60);
        seed(&cache, "live@example.com", 3600);

        let sweeper = SessionSweeper::new(
            Arc::clone(&cache),
            &SessionConfig {
                sweep_interval_seconds: 1,
                ..SessionConfig::default()
            },
        );

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(sweeper.run(rx));

        // First tick fires immediately.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.len(), 1);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }
}
