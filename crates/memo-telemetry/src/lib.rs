//! # Memo Telemetry
//!
//! Logging setup shared by the memo crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use memo_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _logger = init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MEMO_SERVICE_NAME` | `memo` | Service name in logs |
//! | `MEMO_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `MEMO_JSON_LOGS` | `false` | One JSON object per line |
//! | `MEMO_LOG_TARGET` | `true` | Include event targets |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging, StructuredLogger};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber has already been installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
