use crate::calendar::YearMonth;
use chrono::Local;
use std::{env, fmt, path::PathBuf};

/// Name of the single storage slot holding the serialized log.
pub const STORAGE_KEY: &str = "fitnessTrackerLogs";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub start_month: YearMonth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidStartMonth(String),
    ClockOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "PORT is not a valid port: {value:?}"),
            ConfigError::InvalidStartMonth(value) => {
                write!(f, "APP_START_MONTH must look like YYYY-MM, got {value:?}")
            }
            ConfigError::ClockOutOfRange => write!(f, "local date is outside the supported years"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("PORT").ok(),
            env::var("APP_DATA_PATH").ok(),
            env::var("APP_START_MONTH").ok(),
        )
    }

    pub fn from_values(
        port: Option<String>,
        data_path: Option<String>,
        start_month: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let data_path = data_path
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);

        let start_month = match start_month {
            Some(value) => {
                YearMonth::parse(&value).ok_or(ConfigError::InvalidStartMonth(value))?
            }
            None => YearMonth::of(Local::now().date_naive()).ok_or(ConfigError::ClockOutOfRange)?,
        };

        Ok(Self {
            port,
            data_path,
            start_month,
        })
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from(format!("data/{STORAGE_KEY}.json"))
}
