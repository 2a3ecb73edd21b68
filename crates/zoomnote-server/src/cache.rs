//! Summary caching keyed by text snapshot.
//!
//! Engine output is a pure function of `(text, level, max_keywords)`, so a
//! resolved view can be reused for as long as the text is unchanged. Entries
//! are keyed by the content hash of the body and expire after a configurable
//! age. The cache is bounded: inserting into a full cache first drops expired
//! entries, then the oldest one. A background sweeper can also drop expired
//! entries periodically.
//!
//! ## Example
//!
//! ```rust
//! use zoomnote_core::{ContentKey, ZoomLevel};
//! use zoomnote_server::cache::SummaryCache;
//!
//! let cache = SummaryCache::new();
//! let key = ContentKey::of("She decides to call her mother.");
//!
//! assert!(cache.get(&key, ZoomLevel::Line, 5).is_none());
//! cache.set(key, ZoomLevel::Line, 5, "She decides to call her mother.".to_string());
//! assert!(cache.get(&key, ZoomLevel::Line, 5).is_some());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use zoomnote_core::{ContentKey, ZoomLevel};

/// Default maximum cache age in seconds (5 minutes).
pub const DEFAULT_MAX_AGE_SECS: u64 = 300;

/// Default maximum number of cached views.
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Configuration for cache behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum age of cache entries in seconds.
    pub max_age_secs: u64,

    /// Maximum number of entries. Zero disables caching.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    pub fn new(max_age_secs: u64, max_entries: usize) -> Self {
        Self {
            max_age_secs,
            max_entries,
        }
    }

    fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }
}

/// What a cached view was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub content: ContentKey,
    pub level: ZoomLevel,
    pub max_keywords: usize,
}

/// A cached view with its insertion time.
#[derive(Debug, Clone)]
pub struct CachedView {
    pub output: String,
    pub cached_at: Instant,
}

impl CachedView {
    fn new(output: String) -> Self {
        Self {
            output,
            cached_at: Instant::now(),
        }
    }

    /// Returns the age of this cache entry.
    pub fn age(&self) -> Duration {
        self.cached_at.elapsed()
    }

    /// Returns true if this entry is older than the configured max age.
    pub fn is_expired(&self, config: &CacheConfig) -> bool {
        self.age() > config.max_age()
    }
}

/// Thread-safe cache of resolved zoom views.
#[derive(Debug, Clone)]
pub struct SummaryCache {
    cache: Arc<RwLock<HashMap<ViewKey, CachedView>>>,
    config: CacheConfig,
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryCache {
    /// Creates a cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Returns the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Gets a cached view. Expired entries are never returned.
    pub fn get(
        &self,
        content: &ContentKey,
        level: ZoomLevel,
        max_keywords: usize,
    ) -> Option<String> {
        let key = ViewKey {
            content: *content,
            level,
            max_keywords,
        };
        let cache = self.cache.read().ok()?;
        let entry = cache.get(&key)?;

        if entry.is_expired(&self.config) {
            return None;
        }

        Some(entry.output.clone())
    }

    /// Stores a view, evicting to stay within `max_entries`.
    pub fn set(&self, content: ContentKey, level: ZoomLevel, max_keywords: usize, output: String) {
        if self.config.max_entries == 0 {
            return;
        }

        let key = ViewKey {
            content,
            level,
            max_keywords,
        };

        if let Ok(mut cache) = self.cache.write() {
            if !cache.contains_key(&key) && cache.len() >= self.config.max_entries {
                cache.retain(|_, entry| !entry.is_expired(&self.config));
            }
            if !cache.contains_key(&key) && cache.len() >= self.config.max_entries {
                let oldest = cache
                    .iter()
                    .min_by_key(|(_, entry)| entry.cached_at)
                    .map(|(k, _)| *k);
                if let Some(oldest) = oldest {
                    cache.remove(&oldest);
                }
            }
            cache.insert(key, CachedView::new(output));
        }
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn evict_expired(&self) -> usize {
        if let Ok(mut cache) = self.cache.write() {
            let before = cache.len();
            cache.retain(|_, entry| !entry.is_expired(&self.config));
            before - cache.len()
        } else {
            0
        }
    }

    /// Spawns a task that calls [`evict_expired`](Self::evict_expired)
    /// every `period` until the returned handle is aborted.
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period.max(Duration::from_millis(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = cache.evict_expired();
                if evicted > 0 {
                    tracing::debug!(evicted, "evicted expired summary views");
                }
            }
        })
    }

    /// Returns statistics about the cache.
    pub fn stats(&self) -> CacheStats {
        if let Ok(cache) = self.cache.read() {
            let expired = cache
                .values()
                .filter(|entry| entry.is_expired(&self.config))
                .count();

            CacheStats {
                total: cache.len(),
                fresh: cache.len() - expired,
                expired,
            }
        } else {
            CacheStats::default()
        }
    }
}

/// Statistics about cache state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    /// Total number of entries.
    pub total: usize,
    /// Number of fresh entries.
    pub fresh: usize,
    /// Number of expired entries.
    pub expired: usize,
}
