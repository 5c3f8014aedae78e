use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Compound key identifying a playable mode: a category plus an optional
/// tier (e.g. a cooking level). Kept structured internally; flattened to a
/// single string only at the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModeKey {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

impl ModeKey {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            tier: None,
        }
    }

    pub fn with_tier(category: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            tier: Some(tier.into()),
        }
    }

    /// The flat string used as the per-mode key inside the daily-plays blob,
    /// e.g. `"badges"` or `"edibles-burnt"`.
    pub fn storage_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ModeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tier {
            Some(tier) => write!(f, "{}-{}", self.category, tier),
            None => write!(f, "{}", self.category),
        }
    }
}

impl FromStr for ModeKey {
    type Err = std::convert::Infallible;

    // Tier names may themselves contain '-', so only the first separator
    // splits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once('-') {
            Some((category, tier)) => ModeKey::with_tier(category, tier),
            None => ModeKey::new(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_round_trip() {
        let key = ModeKey::with_tier("edibles", "well-done");
        assert_eq!(key.storage_key(), "edibles-well-done");
        assert_eq!("edibles-well-done".parse::<ModeKey>().unwrap(), key);

        let key = ModeKey::new("badges");
        assert_eq!(key.storage_key(), "badges");
        assert_eq!("badges".parse::<ModeKey>().unwrap(), key);
    }

    #[test]
    fn test_tiered_keys_are_distinct() {
        let base = ModeKey::with_tier("edibles", "base");
        let burnt = ModeKey::with_tier("edibles", "burnt");
        assert_ne!(base, burnt);
        assert_ne!(base.storage_key(), burnt.storage_key());
    }
}
