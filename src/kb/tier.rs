//! Knowledge base tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Depth level of cached reference content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KbTier {
    Lite,
    Standard,
    Heavy,
}

impl KbTier {
    /// All tiers, lightest first.
    pub const ALL: [KbTier; 3] = [KbTier::Lite, KbTier::Standard, KbTier::Heavy];

    /// Upper-case name used in environment variable suffixes.
    pub fn env_suffix(&self) -> &'static str {
        match self {
            Self::Lite => "LITE",
            Self::Standard => "STANDARD",
            Self::Heavy => "HEAVY",
        }
    }
}

impl fmt::Display for KbTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_suffix())
    }
}
