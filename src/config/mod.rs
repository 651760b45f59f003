//! Configuration module for the content store.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use crate::query::FeedSort;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Number of posts the home feed exposes
    pub feed_limit: usize,
    /// Sort applied before feed truncation
    pub feed_sort: FeedSort,
    /// Per-task budget for startup services
    pub startup_timeout: Duration,
    /// Whether the data sync startup task runs
    pub enable_sync: bool,
    /// Whether the notification startup task runs
    pub enable_notifications: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_level = env::var("SRIMAA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let feed_limit = env::var("SRIMAA_FEED_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        let feed_sort = env::var("SRIMAA_FEED_SORT")
            .ok()
            .and_then(|v| FeedSort::from_str(&v))
            .unwrap_or(FeedSort::SourceOrder);

        let startup_timeout = env::var("SRIMAA_STARTUP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(5));

        let enable_sync = env::var("SRIMAA_ENABLE_SYNC")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let enable_notifications = env::var("SRIMAA_ENABLE_NOTIFICATIONS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            log_level,
            feed_limit,
            feed_sort,
            startup_timeout,
            enable_sync,
            enable_notifications,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            feed_limit: 7,
            feed_sort: FeedSort::SourceOrder,
            startup_timeout: Duration::from_secs(5),
            enable_sync: false,
            enable_notifications: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SRIMAA_LOG_LEVEL");
        env::remove_var("SRIMAA_FEED_LIMIT");
        env::remove_var("SRIMAA_FEED_SORT");
        env::remove_var("SRIMAA_STARTUP_TIMEOUT_MS");
        env::remove_var("SRIMAA_ENABLE_SYNC");
        env::remove_var("SRIMAA_ENABLE_NOTIFICATIONS");

        let config = Config::from_env();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.feed_limit, 7);
        assert_eq!(config.feed_sort, FeedSort::SourceOrder);
        assert_eq!(config.startup_timeout, Duration::from_secs(5));
        assert!(!config.enable_sync);
        assert!(!config.enable_notifications);
    }
}
