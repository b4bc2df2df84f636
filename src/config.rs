#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{
        Arc, Mutex, OnceLock, PoisonError,
        atomic::{AtomicU64, AtomicUsize, Ordering},
    },
};

use tracing::level_filters::LevelFilter;

use crate::constants::{DEFAULT_RANDOM_CASES, DEFAULT_SEED};

/// Settings read from the environment once per process.
#[derive(Debug)]
pub struct ConfigState {
    /// Seed for every case factory the CLI builds.
    seed:         AtomicU64,
    /// Random sequences of each kind per grading run.
    random_cases: AtomicUsize,
    /// Most verbose level the log subscriber prints.
    log_level:    LevelFilter,
}

impl ConfigState {
    /// Reads `DSGRADE_SEED`, `DSGRADE_RANDOM_CASES` and `DSGRADE_LOG`,
    /// keeping defaults for anything unset or unparseable.
    fn new() -> Self {
        let log_level = read_env("DSGRADE_LOG", LevelFilter::INFO);
        Self {
            seed: AtomicU64::new(read_seed("DSGRADE_SEED")),
            random_cases: AtomicUsize::new(read_env("DSGRADE_RANDOM_CASES", DEFAULT_RANDOM_CASES)),
            log_level,
        }
    }

    /// Seed for generated cases.
    pub fn seed(&self) -> u64 {
        self.seed.load(Ordering::Relaxed)
    }

    /// Replaces the seed, eg. from a command line flag.
    pub fn set_seed(&self, seed: u64) {
        self.seed.store(seed, Ordering::Relaxed);
    }

    /// Number of random sequences drawn per kind.
    pub fn random_cases(&self) -> usize {
        self.random_cases.load(Ordering::Relaxed)
    }

    /// Replaces the number of random sequences drawn per kind.
    pub fn set_random_cases(&self, count: usize) {
        self.random_cases.store(count, Ordering::Relaxed);
    }

    /// Log level for the tracing subscriber.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> ConfigHandle {
    let mut guard = slot().lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(cfg) = guard.as_ref() {
        return ConfigHandle(Arc::clone(cfg));
    }

    let cfg = Arc::new(ConfigState::new());
    tracing::debug!("configuration loaded: {cfg:?}");
    *guard = Some(Arc::clone(&cfg));
    ConfigHandle(cfg)
}

/// Seed for generated cases.
pub fn seed() -> u64 {
    get().seed()
}

/// Number of random sequences drawn per kind.
pub fn random_cases() -> usize {
    get().random_cases()
}

/// Log level for the tracing subscriber.
pub fn log_level() -> LevelFilter {
    get().log_level()
}

/// Parses an environment variable, falling back to `default` when it is
/// missing or malformed.
fn read_env<T: FromStr>(env: &str, default: T) -> T {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Reads a seed given in decimal or as `0x`-prefixed hex.
fn read_seed(env: &str) -> u64 {
    std::env::var(env)
        .ok()
        .and_then(|value| parse_seed(&value))
        .unwrap_or(DEFAULT_SEED)
}

/// Parses a decimal or `0x`-prefixed hexadecimal seed.
pub fn parse_seed(value: &str) -> Option<u64> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_parse_in_both_bases() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 0x5eed "), Some(0x5eed));
        assert_eq!(parse_seed("0XFF"), Some(255));
        assert_eq!(parse_seed("seed"), None);
    }

    #[test]
    fn malformed_env_falls_back() {
        assert_eq!(read_env("DSGRADE_TEST_UNSET_VARIABLE", 7usize), 7);
        assert_eq!(read_seed("DSGRADE_TEST_UNSET_VARIABLE"), DEFAULT_SEED);
    }
}
