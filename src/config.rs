//! Configuration types.

use crate::error::ConfigError;
use crate::kb::KbTier;

/// Default cache lifetime for knowledge base content (6 hours).
pub const DEFAULT_CACHE_DURATION_MS: u64 = 6 * 60 * 60 * 1000;

/// Per-tier knowledge base settings.
#[derive(Debug, Clone)]
pub struct TierConfig {
    /// Cache key the formatted content is stored under.
    pub cache_key: String,
    /// Sheet holding this tier's rows. `None` or a `[PLACEHOLDER]` value
    /// means the tier has not been configured yet.
    pub sheet_name: Option<String>,
    /// Cache lifetime in milliseconds.
    pub cache_duration_ms: u64,
}

impl TierConfig {
    fn new(cache_key: &str, sheet_name: &str) -> Self {
        Self {
            cache_key: cache_key.to_string(),
            sheet_name: Some(sheet_name.to_string()),
            cache_duration_ms: DEFAULT_CACHE_DURATION_MS,
        }
    }

    /// Cache TTL in whole seconds, as handed to the cache store.
    pub fn ttl_secs(&self) -> u64 {
        self.cache_duration_ms / 1000
    }

    /// The configured sheet name, or `None` when it is missing, empty or
    /// still a `[...]` placeholder.
    pub fn resolved_sheet(&self) -> Option<&str> {
        self.sheet_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.contains('['))
    }
}

/// Knowledge base configuration.
#[derive(Debug, Clone)]
pub struct KbConfig {
    /// Opaque identifier of the spreadsheet/workbook holding all tiers.
    pub source_id: String,
    pub lite: TierConfig,
    pub standard: TierConfig,
    pub heavy: TierConfig,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            source_id: "[KB_SOURCE_ID]".to_string(),
            lite: TierConfig::new("KB_LITE", "[KB_SHEET_LITE]"),
            standard: TierConfig::new("KB_STANDARD", "[KB_SHEET_STANDARD]"),
            heavy: TierConfig::new("KB_HEAVY", "[KB_SHEET_HEAVY]"),
        }
    }
}

impl KbConfig {
    /// Settings for a single tier.
    pub fn tier(&self, tier: KbTier) -> &TierConfig {
        match tier {
            KbTier::Lite => &self.lite,
            KbTier::Standard => &self.standard,
            KbTier::Heavy => &self.heavy,
        }
    }

    /// Mutable settings for a single tier.
    pub fn tier_mut(&mut self, tier: KbTier) -> &mut TierConfig {
        match tier {
            KbTier::Lite => &mut self.lite,
            KbTier::Standard => &mut self.standard,
            KbTier::Heavy => &mut self.heavy,
        }
    }

    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Reads `KB_SOURCE_ID`, `KB_CACHE_DURATION_MS`, and per tier
    /// `KB_SHEET_<TIER>` / `KB_CACHE_KEY_<TIER>`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(source_id) = std::env::var("KB_SOURCE_ID") {
            config.source_id = source_id;
        }

        let duration_ms = match std::env::var("KB_CACHE_DURATION_MS") {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: "KB_CACHE_DURATION_MS".to_string(),
                    message: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        for tier in KbTier::ALL {
            let suffix = tier.env_suffix();
            let tier_config = config.tier_mut(tier);

            if let Ok(sheet) = std::env::var(format!("KB_SHEET_{suffix}")) {
                tier_config.sheet_name = Some(sheet);
            }
            if let Ok(key) = std::env::var(format!("KB_CACHE_KEY_{suffix}")) {
                tier_config.cache_key = key;
            }
            if let Some(ms) = duration_ms {
                tier_config.cache_duration_ms = ms;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers_are_unconfigured() {
        let config = KbConfig::default();
        for tier in KbTier::ALL {
            assert!(config.tier(tier).resolved_sheet().is_none());
        }
    }

    #[test]
    fn resolved_sheet_rejects_placeholder_and_empty() {
        let mut tier = TierConfig::new("KB_LITE", "[FILL ME]");
        assert_eq!(tier.resolved_sheet(), None);

        tier.sheet_name = Some("   ".into());
        assert_eq!(tier.resolved_sheet(), None);

        tier.sheet_name = None;
        assert_eq!(tier.resolved_sheet(), None);

        tier.sheet_name = Some("AI_CORE_LITE".into());
        assert_eq!(tier.resolved_sheet(), Some("AI_CORE_LITE"));
    }

    #[test]
    fn ttl_is_floored_to_seconds() {
        let mut tier = TierConfig::new("KB_LITE", "Lite");
        tier.cache_duration_ms = 1_999;
        assert_eq!(tier.ttl_secs(), 1);

        tier.cache_duration_ms = DEFAULT_CACHE_DURATION_MS;
        assert_eq!(tier.ttl_secs(), 21_600);
    }

    #[test]
    fn from_env_overrides_defaults() {
        // SAFETY: only this test touches KB_* variables; no other thread reads them.
        unsafe {
            std::env::set_var("KB_SOURCE_ID", "parrocchia");
            std::env::set_var("KB_SHEET_LITE", "AI_CORE_LITE");
            std::env::set_var("KB_CACHE_KEY_HEAVY", "KB_DOTTRINA");
            std::env::set_var("KB_CACHE_DURATION_MS", "not-a-number");
        }
        let err = KbConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("KB_CACHE_DURATION_MS"));

        unsafe { std::env::set_var("KB_CACHE_DURATION_MS", "60000") };
        let config = KbConfig::from_env().unwrap();
        assert_eq!(config.source_id, "parrocchia");
        assert_eq!(config.lite.resolved_sheet(), Some("AI_CORE_LITE"));
        assert_eq!(config.standard.resolved_sheet(), None);
        assert_eq!(config.heavy.cache_key, "KB_DOTTRINA");
        assert_eq!(config.standard.ttl_secs(), 60);

        unsafe {
            for var in [
                "KB_SOURCE_ID",
                "KB_SHEET_LITE",
                "KB_CACHE_KEY_HEAVY",
                "KB_CACHE_DURATION_MS",
            ] {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn tier_lookup_matches_fields() {
        let config = KbConfig::default();
        assert_eq!(config.tier(KbTier::Lite).cache_key, "KB_LITE");
        assert_eq!(config.tier(KbTier::Standard).cache_key, "KB_STANDARD");
        assert_eq!(config.tier(KbTier::Heavy).cache_key, "KB_HEAVY");
    }
}
