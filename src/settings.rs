//! Runtime settings read from the environment.
//!
//! - `MEMORY_SEED`: deal seed (default: random per run)
//! - `MEMORY_REVEAL_MS`: how long a mismatched pair stays visible (default: 0)
//! - `MEMORY_LOG_PATH`: log file; logging is off when unset
//!
//! Missing or unparsable values fall back to the defaults.

use std::path::PathBuf;

use crate::core::GameConfig;

pub const ENV_SEED: &str = "MEMORY_SEED";
pub const ENV_REVEAL_MS: &str = "MEMORY_REVEAL_MS";
pub const ENV_LOG_PATH: &str = "MEMORY_LOG_PATH";

/// Longest accepted reveal delay.
pub const MAX_REVEAL_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub seed: Option<u64>,
    pub reveal_delay_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (the environment in production).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let seed = get(ENV_SEED).and_then(|s| s.trim().parse().ok());

        let reveal_delay_ms = get(ENV_REVEAL_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.min(MAX_REVEAL_MS))
            .unwrap_or(0);

        let log_path = get(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        Self {
            seed,
            reveal_delay_ms,
            log_path,
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            reveal_delay_ms: self.reveal_delay_ms,
            ..GameConfig::default()
        }
    }
}
