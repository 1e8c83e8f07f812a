//! # Memo Errors
//!
//! Error types for memo encoding and decoding.
//!
//! Every variant aborts the operation. The one tolerated inconsistency, a
//! plaintext length prefix that disagrees with the bytes that follow, is not
//! an error at all: see `framing::FramingWarning`.

use std::fmt;
use thiserror::Error;

/// Which key a marked memo was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// The local private key
    Private,
    /// The recipient's public key
    Public,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Private => f.write_str("private"),
            KeyRole::Public => f.write_str("public"),
        }
    }
}

/// Errors that can occur while encoding or decoding a memo.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemoError {
    /// The memo field itself was absent
    #[error("Memo is required")]
    MissingInput,

    /// A key required for a marked memo was not supplied
    #[error("Missing {0} key for encrypted memo")]
    MissingKey(KeyRole),

    /// The text after the sentinel is not base58
    #[error("Invalid memo token: {0}")]
    InvalidToken(String),

    /// The binary envelope is truncated or a field does not parse
    #[error("Malformed memo envelope: {0}")]
    MalformedEnvelope(String),

    /// The checksum derived from the shared secret does not match
    #[error("Memo integrity check failed")]
    IntegrityCheckFailed,

    /// A key handed to the cipher is not usable
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Plaintext exceeds the configured bound
    #[error("Memo too large: {len} bytes exceeds limit of {max}")]
    MemoTooLarge {
        /// Plaintext length in bytes
        len: usize,
        /// Configured limit in bytes
        max: usize,
    },

    /// Any other cipher failure
    #[error("Cipher failure: {0}")]
    Cipher(String),
}
