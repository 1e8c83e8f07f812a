//! # Outbound Ports (Driven Ports / SPI)
//!
//! The cipher and key primitives are injected so the envelope logic can run
//! against secp256k1 in production and against a deterministic fake in tests.

use crate::domain::entities::{MemoPublicKey, SealedMemo};
use crate::domain::errors::MemoError;
use thiserror::Error;

/// Error from the cipher primitive.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CipherError {
    /// Checksum mismatch, or ciphertext that does not decrypt cleanly
    #[error("Integrity check failed")]
    IntegrityCheckFailed,

    /// A key is not usable (e.g. not a point on the curve)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Anything else the primitive rejected
    #[error("Cipher failed: {0}")]
    Failed(String),
}

impl From<CipherError> for MemoError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::IntegrityCheckFailed => MemoError::IntegrityCheckFailed,
            CipherError::InvalidKey(reason) => MemoError::InvalidKey(reason),
            CipherError::Failed(reason) => MemoError::Cipher(reason),
        }
    }
}

/// Shared-secret cipher over a key pair.
///
/// Implementations must be pure over their inputs so the service can be used
/// from many threads at once.
pub trait MemoCipher: Send + Sync {
    /// Private key type understood by this cipher.
    type PrivateKey;

    /// Derive the compressed public key for `private_key`.
    fn public_key(&self, private_key: &Self::PrivateKey) -> MemoPublicKey;

    /// Check that `public_key` names a usable key.
    ///
    /// # Errors
    /// * `CipherError::InvalidKey` - the bytes are not a valid point
    fn validate_public_key(&self, public_key: &MemoPublicKey) -> Result<(), CipherError>;

    /// Encrypt `plaintext` from `private_key` to `public_key`.
    ///
    /// `nonce` is only fixed by deterministic tests; `None` lets the cipher
    /// choose.
    fn encrypt(
        &self,
        private_key: &Self::PrivateKey,
        public_key: &MemoPublicKey,
        plaintext: &[u8],
        nonce: Option<u64>,
    ) -> Result<SealedMemo, CipherError>;

    /// Decrypt a message exchanged with `counterparty`.
    ///
    /// # Errors
    /// * `CipherError::IntegrityCheckFailed` - `checksum` does not match the
    ///   derived secret, or the ciphertext is corrupt. Never returns plaintext
    ///   in that case.
    fn decrypt(
        &self,
        private_key: &Self::PrivateKey,
        counterparty: &MemoPublicKey,
        nonce: u64,
        ciphertext: &[u8],
        checksum: u32,
    ) -> Result<Vec<u8>, CipherError>;
}
