//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Decryption failed after the checksum matched (bad padding)
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// The checksum derived from the shared secret does not match
    #[error("Checksum mismatch: message carries {expected:#010x}, derived {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum carried by the message
        expected: u32,
        /// Checksum derived locally
        actual: u32,
    },

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Invalid input for cryptographic operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
