use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Feed engine
    pub feed: FeedSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Tunables for the feed pager
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedSettings {
    pub default_limit: i64,
    pub max_limit: i64,
    /// Fixed local offset used for "today" windows, in minutes east of UTC
    pub utc_offset_minutes: i32,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 50,
            utc_offset_minutes: 9 * 60,
        }
    }
}

/// Offsets must stay strictly inside one day
const MAX_UTC_OFFSET_MINUTES: u32 = 24 * 60 - 1;

impl FeedSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit < 1 {
            return Err("FEED_DEFAULT_LIMIT must be positive".to_string());
        }
        if self.max_limit < self.default_limit {
            return Err("FEED_MAX_LIMIT must not be lower than FEED_DEFAULT_LIMIT".to_string());
        }
        if self.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(format!(
                "FEED_UTC_OFFSET_MINUTES must be within -{0}..={0}",
                MAX_UTC_OFFSET_MINUTES
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let defaults = FeedSettings::default();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            feed: FeedSettings {
                default_limit: env::var("FEED_DEFAULT_LIMIT")
                    .unwrap_or_else(|_| defaults.default_limit.to_string())
                    .parse()?,
                max_limit: env::var("FEED_MAX_LIMIT")
                    .unwrap_or_else(|_| defaults.max_limit.to_string())
                    .parse()?,
                utc_offset_minutes: env::var("FEED_UTC_OFFSET_MINUTES")
                    .unwrap_or_else(|_| defaults.utc_offset_minutes.to_string())
                    .parse()?,
            },
        };

        config.feed.validate()?;

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
