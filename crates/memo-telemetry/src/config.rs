//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for memo logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Whether to include the event target (module path) in output
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "memo".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MEMO_SERVICE_NAME`: Service name (default: memo)
    /// - `MEMO_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `MEMO_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `MEMO_LOG_TARGET`: Include event targets (default: true)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("MEMO_SERVICE_NAME").unwrap_or_else(|_| "memo".to_string()),

            log_level: env::var("MEMO_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("MEMO_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            with_target: env::var("MEMO_LOG_TARGET")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// Override the log level, keeping everything else.
    pub fn with_log_level(mut self, log_level: &str) -> Self {
        self.log_level = log_level.to_string();
        self
    }
}
