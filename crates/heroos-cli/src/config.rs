//! Session configuration resolved from command-line flags and environment.
//!
//! Flags win over environment variables; environment variables win over the
//! built-in defaults.

use std::time::Duration;

use heroos_lib::{GenerationConfig, DEFAULT_DESTINATION};
use tracing::warn;

/// Environment variable used to seed inventory generation.
pub const SEED_ENV: &str = "HEROOS_SEED";

/// Environment variable overriding the pause after each menu action.
pub const DELAY_ENV: &str = "HEROOS_DELAY_MS";

/// Pause after each menu action when nothing else is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Everything the interactive session needs besides its I/O handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub delay: Duration,
    pub show_logo: bool,
    /// Location every navigation query heads towards.
    pub destination: String,
    pub generation: GenerationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            delay: DEFAULT_DELAY,
            show_logo: true,
            destination: DEFAULT_DESTINATION.to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Combine explicit flags with `HEROOS_*` environment fallbacks.
    pub fn resolve(seed: Option<u64>, delay_ms: Option<u64>, no_logo: bool) -> Self {
        let seed = seed.or_else(|| env_u64(SEED_ENV));
        let delay = delay_ms
            .or_else(|| env_u64(DELAY_ENV))
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY);

        Self {
            seed,
            delay,
            show_logo: !no_logo,
            ..Self::default()
        }
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, value = %raw, error = %err, "ignoring invalid environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_helpers::with_env_vars;

    #[test]
    fn flags_take_precedence_over_environment() {
        with_env_vars(&[(SEED_ENV, Some("9")), (DELAY_ENV, Some("5"))], || {
            let config = SessionConfig::resolve(Some(1), Some(0), true);
            assert_eq!(config.seed, Some(1));
            assert_eq!(config.delay, Duration::ZERO);
            assert!(!config.show_logo);
        });
    }

    #[test]
    fn environment_fills_missing_flags() {
        with_env_vars(&[(SEED_ENV, Some("9")), (DELAY_ENV, Some("250"))], || {
            let config = SessionConfig::resolve(None, None, false);
            assert_eq!(config.seed, Some(9));
            assert_eq!(config.delay, Duration::from_millis(250));
        });
    }

    #[test]
    fn invalid_environment_values_fall_back_to_defaults() {
        with_env_vars(&[(SEED_ENV, Some("abc")), (DELAY_ENV, Some("-1"))], || {
            let config = SessionConfig::resolve(None, None, false);
            assert_eq!(config.seed, None);
            assert_eq!(config.delay, DEFAULT_DELAY);
            assert_eq!(config.destination, "G");
        });
    }
}
