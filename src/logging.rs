//! log4rs setup.

use crate::config::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{l} - {m}{n}";

/// Install the global logger.
///
/// Uses the log4rs file from `config.log_config` when it exists, otherwise a
/// stderr logger at `config.log_level`. Stdout is left to the report.
pub fn init(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
        log::debug!("Logging configured from {}", config.log_config);
    } else {
        let log_config = stderr_config(config)?;
        log4rs::init_config(log_config).map_err(|e| format!("Error initializing log4rs: {e}"))?;
        log::trace!("No {} found, logging to stderr", config.log_config);
    }
    Ok(())
}

fn stderr_config(config: &Config) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))
        .map_err(|e| format!("Invalid log4rs config: {e}"))?;
    Ok(log_config)
}
