const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Severity of a log message, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// Portal-wide settings, fixed at build time
#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    /// Base URL of the staff REST API, without a trailing slash
    pub api_base_url: String,
    /// Forward log messages to the API's log endpoint
    pub remote_logging: bool,
    pub min_log_level: LogLevel,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("STAFF_PORTAL_API_URL"),
            option_env!("STAFF_PORTAL_REMOTE_LOGS"),
            option_env!("STAFF_PORTAL_LOG_LEVEL"),
        )
    }
}

impl PortalConfig {
    /// Build a config from raw setting values, falling back to defaults for
    /// anything missing or unparseable
    pub fn from_values(
        api_base_url: Option<&str>,
        remote_logging: Option<&str>,
        min_log_level: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let remote_logging = remote_logging
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let min_log_level = min_log_level
            .and_then(LogLevel::parse)
            .unwrap_or(LogLevel::Info);

        Self {
            api_base_url,
            remote_logging,
            min_log_level,
        }
    }
}
