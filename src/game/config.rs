//! Session Configuration
//!
//! Tunables and the two policy decisions the economy leaves open: whether
//! permanent upgrades survive a new run, and whether a heal at full health
//! is charged.

use std::str::FromStr;

use thiserror::Error;

use crate::{BASE_SPEED, DEFAULT_MAX_LIVES, OFFERS_PER_VISIT, TARGET_WORD};

/// What happens to permanent upgrades when a new run starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpgradePolicy {
    /// Double jump, immortality and extra heart slots carry over.
    #[default]
    Persist,
    /// Every run starts from the default loadout.
    ResetEachRun,
}

/// What buying HEAL does when lives are already full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealPolicy {
    /// Charge the cost; the heal itself is a no-op.
    #[default]
    ChargeAtFull,
    /// Refuse the purchase; nothing is charged.
    RefuseAtFull,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be used.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Divisor for the displayed speed percentage.
    pub base_speed: f64,
    /// Heart slots at the start of the first run.
    pub default_max_lives: u32,
    /// Word whose letters are collected; its length bounds letter indices.
    pub target_word: String,
    /// Offers presented per shop visit.
    pub offers_per_visit: usize,
    /// Root seed for shop sampling.
    pub seed: u64,
    /// Upgrade carry-over between runs.
    pub upgrade_policy: UpgradePolicy,
    /// HEAL behavior at full lives.
    pub heal_policy: HealPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            default_max_lives: DEFAULT_MAX_LIVES,
            target_word: TARGET_WORD.to_string(),
            offers_per_visit: OFFERS_PER_VISIT,
            seed: 0,
            upgrade_policy: UpgradePolicy::default(),
            heal_policy: HealPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Create config from `GEM_RUNNER_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("GEM_RUNNER_BASE_SPEED") {
            config.base_speed = parse("GEM_RUNNER_BASE_SPEED", &v)?;
        }
        if let Some(v) = lookup("GEM_RUNNER_MAX_LIVES") {
            config.default_max_lives = parse("GEM_RUNNER_MAX_LIVES", &v)?;
        }
        if let Some(v) = lookup("GEM_RUNNER_TARGET_WORD") {
            config.target_word = v.trim().to_string();
        }
        if let Some(v) = lookup("GEM_RUNNER_OFFERS") {
            config.offers_per_visit = parse("GEM_RUNNER_OFFERS", &v)?;
        }
        if let Some(v) = lookup("GEM_RUNNER_SEED") {
            config.seed = parse("GEM_RUNNER_SEED", &v)?;
        }
        if let Some(v) = lookup("GEM_RUNNER_UPGRADES") {
            config.upgrade_policy = match v.as_str() {
                "persist" => UpgradePolicy::Persist,
                "reset" => UpgradePolicy::ResetEachRun,
                _ => return Err(invalid("GEM_RUNNER_UPGRADES", v)),
            };
        }
        if let Some(v) = lookup("GEM_RUNNER_HEAL_AT_FULL") {
            config.heal_policy = match v.as_str() {
                "charge" => HealPolicy::ChargeAtFull,
                "refuse" => HealPolicy::RefuseAtFull,
                _ => return Err(invalid("GEM_RUNNER_HEAL_AT_FULL", v)),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break session invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_speed.is_finite() && self.base_speed > 0.0) {
            return Err(invalid("GEM_RUNNER_BASE_SPEED", self.base_speed.to_string()));
        }
        if self.default_max_lives == 0 {
            return Err(invalid("GEM_RUNNER_MAX_LIVES", "0".to_string()));
        }
        if self.target_word.trim().is_empty() {
            return Err(invalid("GEM_RUNNER_TARGET_WORD", self.target_word.clone()));
        }
        if self.offers_per_visit == 0 {
            return Err(invalid("GEM_RUNNER_OFFERS", "0".to_string()));
        }
        Ok(())
    }

    /// Number of collectible letters.
    #[inline]
    pub fn word_length(&self) -> usize {
        self.target_word.chars().count()
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value.to_string()))
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { key, value }
}
