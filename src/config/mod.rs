//! Configuration management

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    InvalidInterval(&'static str),
    #[error("inactivity warning ({warn} min) must come before the session timeout ({timeout} min)")]
    WarningAfterTimeout { warn: u32, timeout: u32 },
    #[error("invalid dashboard config overrides: {0}")]
    Overrides(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Backend origin; only the native probe needs it (the browser uses
    /// same-origin relative URLs).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cookie header sent by the probe (an authenticated backend session).
    #[serde(default)]
    pub session_cookie: Option<String>,

    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint_px: u32,

    #[serde(default = "default_clock_interval")]
    pub clock_interval_secs: u64,

    #[serde(default = "default_stats_interval")]
    pub stats_interval_secs: u64,

    #[serde(default = "default_session_poll")]
    pub session_poll_secs: u64,

    #[serde(default = "default_inactivity_tick")]
    pub inactivity_tick_secs: u64,

    #[serde(default = "default_inactivity_warning")]
    pub inactivity_warning_minutes: u32,

    #[serde(default = "default_session_timeout")]
    pub session_timeout_minutes: u32,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_mobile_breakpoint() -> u32 {
    992
}

fn default_clock_interval() -> u64 {
    60
}

fn default_stats_interval() -> u64 {
    30
}

fn default_session_poll() -> u64 {
    60
}

fn default_inactivity_tick() -> u64 {
    60
}

fn default_inactivity_warning() -> u32 {
    25
}

fn default_session_timeout() -> u32 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_cookie: None,
            mobile_breakpoint_px: default_mobile_breakpoint(),
            clock_interval_secs: default_clock_interval(),
            stats_interval_secs: default_stats_interval(),
            session_poll_secs: default_session_poll(),
            inactivity_tick_secs: default_inactivity_tick(),
            inactivity_warning_minutes: default_inactivity_warning(),
            session_timeout_minutes: default_session_timeout(),
        }
    }
}

impl DashboardConfig {
    /// Apply a JSON object of overrides (the page's `data-dashboard-config`).
    /// Keys not present keep their defaults.
    pub fn from_json_overrides(raw: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("clock_interval_secs", self.clock_interval_secs),
            ("stats_interval_secs", self.stats_interval_secs),
            ("session_poll_secs", self.session_poll_secs),
            ("inactivity_tick_secs", self.inactivity_tick_secs),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::InvalidInterval(name));
        }
        if self.inactivity_warning_minutes == 0 {
            return Err(ConfigError::InvalidInterval("inactivity_warning_minutes"));
        }
        if self.inactivity_warning_minutes >= self.session_timeout_minutes {
            return Err(ConfigError::WarningAfterTimeout {
                warn: self.inactivity_warning_minutes,
                timeout: self.session_timeout_minutes,
            });
        }
        Ok(())
    }
}

/// Get config directory (DASHBOARD_CONFIG_DIR or platform default)
#[cfg(feature = "native")]
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("DASHBOARD_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/store-dashboard");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("store-dashboard");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/store-dashboard");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("store-dashboard");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

#[cfg(feature = "native")]
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Load from config file if it exists (dashboard.toml / .json / .yaml)
        .add_source(
            ::config::File::with_name(&config_dir.join("dashboard").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (DASHBOARD_BASE_URL, DASHBOARD_STATS_INTERVAL_SECS, ...)
        .add_source(
            ::config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Flask's own FLASK_RUN_PORT is honoured when no explicit base URL is given
    if std::env::var("DASHBOARD_BASE_URL").is_err() {
        if let Ok(port) = std::env::var("FLASK_RUN_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder =
                    builder.set_override("base_url", format!("http://127.0.0.1:{port_num}"))?;
            }
        }
    }

    let config: DashboardConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
