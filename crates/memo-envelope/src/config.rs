//! Memo configuration from environment variables.

use crate::domain::errors::MemoError;
use std::env;

/// Configuration for the memo service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoConfig {
    /// Upper bound on plaintext bytes accepted by `encode` (unbounded if `None`)
    pub max_plaintext_bytes: Option<usize>,
}

impl MemoConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MEMO_MAX_PLAINTEXT_BYTES`: Plaintext bound in bytes (default: unbounded).
    ///   Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self {
            max_plaintext_bytes: env::var("MEMO_MAX_PLAINTEXT_BYTES")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Bound plaintext to `max` bytes.
    pub fn with_max_plaintext_bytes(mut self, max: usize) -> Self {
        self.max_plaintext_bytes = Some(max);
        self
    }

    /// Check `len` against the configured bound.
    ///
    /// # Errors
    ///
    /// `MemoError::MemoTooLarge` if `len` exceeds the bound.
    pub fn check_plaintext_len(&self, len: usize) -> Result<(), MemoError> {
        match self.max_plaintext_bytes {
            Some(max) if len > max => Err(MemoError::MemoTooLarge { len, max }),
            _ => Ok(()),
        }
    }
}
