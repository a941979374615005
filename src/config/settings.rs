use crate::error::{Result, TestUtilError};
use log::LevelFilter;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_BIND_HOST: &str = "127.0.0.1";
static DEFAULT_LOG_LEVEL: &str = "info";

const BIND_HOST_KEY: &str = "TESTUTIL_BIND_HOST";
const LOG_LEVEL_KEY: &str = "TESTUTIL_LOG";

/// Settings accepted from a TOML table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_host: Option<String>,
    log_level: Option<String>,
}

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Build a config from the environment, falling back to defaults.
    pub fn new() -> Config {
        let mut map = HashMap::new();
        for (key, default) in [
            (BIND_HOST_KEY, DEFAULT_BIND_HOST),
            (LOG_LEVEL_KEY, DEFAULT_LOG_LEVEL),
        ] {
            let value = env::var(key).unwrap_or_else(|_| default.to_string());
            map.insert(String::from(key), value);
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    /// Build a config from a TOML table such as
    /// `bind_host = "0.0.0.0"` / `log_level = "debug"`.
    ///
    /// Keys missing from the table keep their environment or default value.
    pub fn from_toml_str(contents: &str) -> Result<Config> {
        let settings: FileSettings = toml::from_str(contents)?;
        let config = Config::new();

        if let Some(host) = settings.bind_host {
            if host.trim().is_empty() {
                return Err(TestUtilError::Config("bind_host must not be empty".to_string()));
            }
            config.set_bind_host(host);
        }
        if let Some(level) = settings.log_level {
            let filter = parse_level(&level)?;
            config.set_log_level(filter);
        }

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let contents = std::fs::read_to_string(path)?;
        Config::from_toml_str(&contents)
    }

    pub fn get_bind_host(&self) -> String {
        self.get(BIND_HOST_KEY)
            .unwrap_or_else(|| DEFAULT_BIND_HOST.to_string())
    }

    pub fn set_bind_host(&self, host: String) {
        self.set(BIND_HOST_KEY, host);
    }

    /// The level test logging runs at. Unparseable values fall back to `info`.
    pub fn get_log_level(&self) -> LevelFilter {
        self.get(LOG_LEVEL_KEY)
            .and_then(|level| parse_level(&level).ok())
            .unwrap_or(LevelFilter::Info)
    }

    pub fn set_log_level(&self, level: LevelFilter) {
        self.set(LOG_LEVEL_KEY, level.to_string().to_lowercase());
    }

    fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.insert(String::from(key), value);
    }
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| TestUtilError::Config(format!("Unknown log level: {level}")))
}
