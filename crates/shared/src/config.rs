//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Clock configuration.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Business day boundaries.
    #[serde(default)]
    pub business_day: BusinessDayConfig,
}

/// Clock configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClockConfig {
    /// IANA timezone name (e.g., "Europe/London") used as the local zone.
    ///
    /// When unset, the process local zone is used.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Business day boundaries, in local wall-clock time.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessDayConfig {
    /// Hour the business day starts.
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    /// Minutes past `start_hour` the business day starts.
    #[serde(default)]
    pub start_mins: u32,
    /// Hour the business day ends.
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    /// Minutes past `end_hour` the business day ends.
    #[serde(default)]
    pub end_mins: u32,
}

fn default_start_hour() -> u32 {
    9
}

fn default_end_hour() -> u32 {
    17
}

impl Default for BusinessDayConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            start_mins: 0,
            end_hour: default_end_hour(),
            end_mins: 0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Reads `.env` if present, then `config/default`, `config/{RUN_MODE}`
    /// and `DATEKIT__*` environment variables, later sources winning.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DATEKIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
