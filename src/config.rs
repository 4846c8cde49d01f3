//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use std::error::Error;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "CIDR_PLANNER_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "CIDR_PLANNER_LOG_LEVEL";
pub const ENV_OUTPUT: &str = "CIDR_PLANNER_OUTPUT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}', expected text or json").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// log4rs YAML file, used when it exists.
    pub log_config: String,
    /// Level of the fallback stderr logger.
    pub log_level: log::LevelFilter,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_level: log::LevelFilter::Warn,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load `.env` (if any) and build the configuration from the environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level
                .parse()
                .map_err(|_| format!("Invalid {ENV_LOG_LEVEL} '{level}'"))?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        Ok(config)
    }
}
