//! Cache-aside knowledge base loader.
//!
//! `load_tier` checks the shared cache first and only reads the tabular
//! source on a miss. Failures are logged and degrade to an empty string;
//! `stats` is the one place their messages are surfaced.
//!
//! No locking spans the check-fetch-store sequence. Two concurrent misses
//! on the same tier both fetch and the later `put` wins, which is safe
//! because formatting is deterministic.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::KbConfig;
use crate::error::KbError;
use crate::kb::cache::CacheStore;
use crate::kb::format::format_rows;
use crate::kb::source::TabularSource;
use crate::kb::tier::KbTier;

/// Diagnostics for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TierStats {
    #[serde(rename_all = "camelCase")]
    Loaded {
        /// Newline-delimited segments in the content.
        lines: usize,
        size_bytes: usize,
        /// Whether the entry was cached before the stats call.
        cached: bool,
    },
    Failed {
        error: String,
    },
}

/// Loads tiered reference content through a shared cache.
pub struct KnowledgeBaseLoader {
    config: KbConfig,
    cache: Arc<dyn CacheStore>,
    source: Arc<dyn TabularSource>,
}

impl KnowledgeBaseLoader {
    pub fn new(
        config: KbConfig,
        cache: Arc<dyn CacheStore>,
        source: Arc<dyn TabularSource>,
    ) -> Self {
        Self {
            config,
            cache,
            source,
        }
    }

    /// Cache key for a tier.
    pub fn cache_key(&self, tier: KbTier) -> &str {
        &self.config.tier(tier).cache_key
    }

    /// Load a tier's content. Returns an empty string when the content is
    /// unavailable for any reason.
    pub fn load_tier(&self, tier: KbTier) -> String {
        self.load_logged(tier).unwrap_or_default()
    }

    /// `try_load_tier`, emitting one error event on failure.
    fn load_logged(&self, tier: KbTier) -> Result<String, KbError> {
        self.try_load_tier(tier).inspect_err(|e| {
            error!(tier = %tier, error = %e, "Failed to load KB tier");
        })
    }

    /// Cache-aside load that reports why content is unavailable.
    pub fn try_load_tier(&self, tier: KbTier) -> Result<String, KbError> {
        let tier_config = self.config.tier(tier);
        let key = tier_config.cache_key.as_str();

        if let Some(cached) = self.cache.get(key).filter(|c| !c.is_empty()) {
            debug!(tier = %tier, key, "KB tier loaded from cache");
            return Ok(cached);
        }

        let sheet = tier_config
            .resolved_sheet()
            .ok_or_else(|| KbError::Configuration {
                tier: tier.to_string(),
            })?;

        let rows = self.source.fetch_rows(&self.config.source_id, sheet)?;
        let content = format_rows(&rows);

        self.cache.put(key, &content, tier_config.ttl_secs())?;

        info!(
            tier = %tier,
            sheet,
            rows = rows.len(),
            size = content.len(),
            "KB tier loaded from source"
        );
        Ok(content)
    }

    /// Warm the cache for every tier.
    pub fn preload_all(&self) {
        info!("Preloading KB tiers");
        for tier in KbTier::ALL {
            self.load_tier(tier);
        }
        info!("KB tiers preloaded");
    }

    /// Drop one tier's cached content, or every tier's when `None`.
    pub fn invalidate(&self, tier: Option<KbTier>) {
        match tier {
            Some(tier) => {
                self.cache.remove(self.cache_key(tier));
                info!(tier = %tier, "KB cache invalidated");
            }
            None => {
                let keys: Vec<&str> = KbTier::ALL.iter().map(|t| self.cache_key(*t)).collect();
                self.cache.remove_all(&keys);
                info!("KB cache fully invalidated");
            }
        }
    }

    /// Per-tier diagnostics. A failing tier never hides the others.
    pub fn stats(&self) -> BTreeMap<KbTier, TierStats> {
        KbTier::ALL
            .into_iter()
            .map(|tier| {
                let cached = self.cache.get(self.cache_key(tier)).is_some();
                let stats = match self.load_logged(tier) {
                    Ok(content) => TierStats::Loaded {
                        lines: content.split('\n').count(),
                        size_bytes: content.len(),
                        cached,
                    },
                    Err(e) => TierStats::Failed {
                        error: e.to_string(),
                    },
                };
                (tier, stats)
            })
            .collect()
    }
}
