use std::env;
use std::path::PathBuf;

use crate::rates::NBG_RATES_URL;

const APP_DIR: &str = "rusty-lari";
pub const CACHE_DIR_VAR: &str = "RUSTY_LARI_CACHE_DIR";
pub const RATES_URL_VAR: &str = "RUSTY_LARI_RATES_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where resolved rates and the last report snapshot are kept between runs.
    pub cache_dir: PathBuf,
    pub rates_url: String,
}

/// The per-user cache directory, falling back to the home directory. Never
/// depends on the working directory unless neither can be determined.
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join(APP_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            rates_url: NBG_RATES_URL.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `RUSTY_LARI_CACHE_DIR` and `RUSTY_LARI_RATES_URL`
    /// when they are set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            cache_dir: var(CACHE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
            rates_url: var(RATES_URL_VAR).unwrap_or(defaults.rates_url),
        }
    }
}
