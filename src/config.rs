//! Runtime settings read from the environment (and an optional `.env`).

use log::LevelFilter;
use std::env;
use std::str::FromStr;

/// Env var naming the log4rs config file.
pub const LOG_CONFIG_VAR: &str = "CALCIPROG_LOG_CONFIG";
/// Env var with the root log level used when no log4rs file is found.
pub const LOG_LEVEL_VAR: &str = "CALCIPROG_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file, used only if it exists.
    pub log_config: String,
    /// Level for the built-in stderr logger.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Build from the process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(LOG_CONFIG_VAR).ok(), env::var(LOG_LEVEL_VAR).ok())
    }

    fn from_vars(log_config: Option<String>, log_level: Option<String>) -> Self {
        let default = Config::default();
        let log_level = match log_level {
            Some(level) => LevelFilter::from_str(level.trim()).unwrap_or_else(|_| {
                // logger is not up yet
                eprintln!("{LOG_LEVEL_VAR}={level} is not a log level, using {}", default.log_level);
                default.log_level
            }),
            None => default.log_level,
        };
        Config {
            log_config: log_config
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(default.log_config),
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, "log4rs.yml");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_from_vars() {
        let config = Config::from_vars(Some("conf/log.yml".to_string()), Some("debug".to_string()));
        assert_eq!(config.log_config, "conf/log.yml");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = Config::from_vars(Some(" ".to_string()), Some("loud".to_string()));
        assert_eq!(config.log_config, "log4rs.yml");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }
}
