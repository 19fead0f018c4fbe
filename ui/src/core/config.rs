//! Runtime configuration for the dashboard.
//!
//! Defaults are compiled in. Native builds may override a few values through
//! environment variables, read once on first access:
//!
//! - `INSIGHTBOARD_DATA_DIR` – directory used for persisted stores and exports.
//! - `INSIGHTBOARD_REFRESH_MS` – mock data refresh interval in milliseconds.

use once_cell::sync::Lazy;

/// Storage key holding the persisted theme (`"light"` / `"dark"`).
pub const THEME_KEY: &str = "theme";

/// Storage key holding the persisted filters and saved reports.
pub const DASHBOARD_STORE_KEY: &str = "analytics-dashboard-store";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How often the mock feed is re-fetched while it is the active source.
    pub refetch_interval_ms: u64,
    /// Tick of the simulated "active users" metric.
    pub live_tick_ms: u64,
    /// Simulated network latency bounds for the mock API.
    pub mock_latency_min_ms: u64,
    pub mock_latency_max_ms: u64,
    /// Overrides the platform data directory on native builds.
    pub data_dir_override: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refetch_interval_ms: 10_000,
            live_tick_ms: 2_000,
            mock_latency_min_ms: 500,
            mock_latency_max_ms: 1_000,
            data_dir_override: None,
        }
    }
}

impl AppConfig {
    /// Defaults with environment overrides applied (native only).
    #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(dir) = std::env::var("INSIGHTBOARD_DATA_DIR") {
                if !dir.trim().is_empty() {
                    config.data_dir_override = Some(dir);
                }
            }
            if let Ok(raw) = std::env::var("INSIGHTBOARD_REFRESH_MS") {
                config.apply_refresh_override(&raw);
            }
        }

        config
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn apply_refresh_override(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms >= 1_000 => self.refetch_interval_ms = ms,
            _ => tracing::warn!(value = raw, "ignoring invalid INSIGHTBOARD_REFRESH_MS"),
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Process-wide configuration.
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_timings() {
        let config = AppConfig::default();
        assert_eq!(config.refetch_interval_ms, 10_000);
        assert_eq!(config.live_tick_ms, 2_000);
        assert!(config.mock_latency_min_ms < config.mock_latency_max_ms);
    }

    #[test]
    fn refresh_override_rejects_garbage_and_tiny_values() {
        let mut config = AppConfig::default();
        config.apply_refresh_override("abc");
        assert_eq!(config.refetch_interval_ms, 10_000);
        config.apply_refresh_override("10");
        assert_eq!(config.refetch_interval_ms, 10_000);
        config.apply_refresh_override(" 30000 ");
        assert_eq!(config.refetch_interval_ms, 30_000);
    }
}
