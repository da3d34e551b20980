//! Concurrency-safe mapping from principal to its live session.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use hotelman_core::result::AppResult;

use crate::token::SessionClaims;

/// A live session: the signed bearer string plus its decoded claims.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    /// The signed bearer token, exactly as handed to the client.
    pub token: String,
    /// Decoded claims embedded in `token`.
    pub claims: SessionClaims,
}

/// In-memory store of the single currently-valid session per principal.
///
/// The map is sharded; operations on different principals do not contend
/// on a single lock. Constructed once at startup and handed to the token
/// issuer — never ambient global state.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: DashMap<String, SessionEntry>,
}

impl SessionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the live entry for `principal`, minting a new one when the
    /// existing entry is absent or expired.
    ///
    /// The shard write guard is held across the check and the mint, so
    /// concurrent logins for the same principal serialize and exactly one
    /// of them mints. An unexpired entry is returned unchanged: same
    /// bearer bytes, same session id.
    pub fn get_or_create<F>(&self, principal: &str, mint: F) -> AppResult<SessionEntry>
    where
        F: FnOnce() -> AppResult<SessionEntry>,
    {
        match self.entries.entry(principal.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().claims.is_expired() {
                    let fresh = mint()?;
                    debug!(principal, "replacing expired session entry");
                    occupied.insert(fresh.clone());
                    Ok(fresh)
                } else {
                    Ok(occupied.get().clone())
                }
            }
            Entry::Vacant(vacant) => {
                let fresh = mint()?;
                debug!(principal, "created session entry");
                vacant.insert(fresh.clone());
                Ok(fresh)
            }
        }
    }

    /// Returns the entry for `principal` without liveness filtering.
    pub fn get(&self, principal: &str) -> Option<SessionEntry> {
        self.entries.get(principal).map(|entry| entry.clone())
    }

    /// Removes the entry for `principal` unconditionally.
    ///
    /// Returns whether an entry was present.
    pub fn invalidate(&self, principal: &str) -> bool {
        self.entries.remove(principal).is_some()
    }

    /// Removes every entry whose claims have expired.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.claims.is_expired());
        before.saturating_sub(self.entries.len())
    }

    /// Number of cached sessions, live or not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
