// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session catalog snapshots with time-based refresh.
//!
//! Each session owns one [`CacheEntry`] holding the full product list as it
//! was at `fetched_at`. An entry is served while its age is below the TTL;
//! after that the next [`CatalogCache::get`] refetches and replaces the whole
//! entry. Entries are never patched in place.
//!
//! Refreshing is check, fetch, then replace, with no map guard held across
//! the fetch. Two concurrent calls for the same session may therefore both
//! fetch; callers that need exactly one fetch serialize per session (the
//! Telegram dispatcher already handles one update per chat at a time).

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use posy_config::model::CatalogConfig;
use posy_core::{CatalogSource, Product, SessionId};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// One session's catalog snapshot.
#[derive(Debug, Clone)]
struct CacheEntry {
    products: Arc<[Product]>,
    fetched_at: Instant,
    /// Set by [`CatalogCache::invalidate`]: serve nothing fresh, keep as fallback.
    invalidated: bool,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        !self.invalidated && now.duration_since(self.fetched_at) < ttl
    }
}

/// Keyed store of catalog snapshots, one per conversation session.
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    entries: DashMap<SessionId, CacheEntry>,
    ttl: Duration,
    max_sessions: usize,
}

impl CatalogCache {
    /// Creates a cache with the TTL and capacity from `config`.
    pub fn new(source: Arc<dyn CatalogSource>, config: &CatalogConfig) -> Self {
        Self::with_limits(
            source,
            Duration::from_secs(config.ttl_secs),
            config.max_sessions,
        )
    }

    pub fn with_limits(source: Arc<dyn CatalogSource>, ttl: Duration, max_sessions: usize) -> Self {
        Self {
            source,
            entries: DashMap::new(),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// The catalog source behind this cache.
    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }

    /// Returns the session's snapshot, refetching when missing or expired.
    ///
    /// Never fails. When the source is unavailable the previous snapshot is
    /// served even if it is past its TTL, and a session that never fetched
    /// successfully gets an empty list.
    pub async fn get(&self, session: &SessionId) -> Arc<[Product]> {
        let now = Instant::now();
        let previous = match self.entries.get(session) {
            Some(entry) if entry.is_fresh(now, self.ttl) => {
                debug!(session = %session, "catalog cache hit");
                return Arc::clone(&entry.products);
            }
            Some(entry) => Some(Arc::clone(&entry.products)),
            None => None,
        };

        match self.source.fetch_active_products().await {
            Ok(products) => {
                let snapshot: Arc<[Product]> = products.into();
                info!(
                    session = %session,
                    count = snapshot.len(),
                    refresh = previous.is_some(),
                    "catalog snapshot fetched"
                );
                self.store(
                    session.clone(),
                    CacheEntry {
                        products: Arc::clone(&snapshot),
                        fetched_at: Instant::now(),
                        invalidated: false,
                    },
                );
                snapshot
            }
            Err(e) => match previous {
                Some(stale) => {
                    warn!(session = %session, error = %e, "catalog fetch failed, serving stale snapshot");
                    stale
                }
                None => {
                    warn!(session = %session, error = %e, "catalog fetch failed, no snapshot to fall back on");
                    Arc::from(Vec::new())
                }
            },
        }
    }

    /// Forces the next [`get`](Self::get) for `session` to refetch. The
    /// current snapshot is kept as the fallback if that fetch fails.
    pub fn invalidate(&self, session: &SessionId) {
        if let Some(mut entry) = self.entries.get_mut(session) {
            entry.invalidated = true;
        }
    }

    /// Drops the session's entry entirely.
    pub fn evict(&self, session: &SessionId) -> bool {
        self.entries.remove(session).is_some()
    }

    /// Number of sessions currently holding a snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces an entry, evicting the least recently fetched
    /// session when a new one would exceed capacity.
    fn store(&self, session: SessionId, entry: CacheEntry) {
        if !self.entries.contains_key(&session) && self.entries.len() >= self.max_sessions {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|e| e.value().fetched_at)
                .map(|e| e.key().clone());
            if let Some(oldest) = oldest {
                self.entries.remove(&oldest);
                debug!(session = %oldest, "evicted least recently fetched catalog snapshot");
            }
        }
        self.entries.insert(session, entry);
    }
}
