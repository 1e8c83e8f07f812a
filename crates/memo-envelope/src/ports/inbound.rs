//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the memo subsystem.

use crate::domain::entities::{MemoEnvelope, MemoPublicKey};
use crate::domain::errors::MemoError;

/// Primary memo API.
///
/// Unmarked memos (no leading `#`) pass through both directions unchanged and
/// need no keys. Implementations must be thread-safe (`Send + Sync`).
pub trait MemoCodecApi: Send + Sync {
    /// Private key type accepted by this implementation.
    type PrivateKey;

    /// Encrypt a marked memo from `private_key` to `public_key`.
    ///
    /// # Errors
    /// * `MemoError::MissingKey` - memo is marked and a key is `None`
    /// * `MemoError::MemoTooLarge` - plaintext exceeds the configured bound
    fn encode(
        &self,
        private_key: Option<&Self::PrivateKey>,
        public_key: Option<&MemoPublicKey>,
        memo: &str,
        nonce: Option<u64>,
    ) -> Result<String, MemoError>;

    /// Decrypt a marked memo with the sender's or recipient's private key.
    ///
    /// # Errors
    /// * `MemoError::MissingKey` - memo is marked and `private_key` is `None`
    /// * `MemoError::InvalidToken` - token is not base58
    /// * `MemoError::MalformedEnvelope` - envelope does not parse
    /// * `MemoError::IntegrityCheckFailed` - wrong key or tampered envelope
    fn decode(&self, private_key: Option<&Self::PrivateKey>, memo: &str)
        -> Result<String, MemoError>;

    /// [`encode`](Self::encode) for an optional transaction memo field.
    ///
    /// # Errors
    /// * `MemoError::MissingInput` - `memo` is `None`
    fn encode_field(
        &self,
        private_key: Option<&Self::PrivateKey>,
        public_key: Option<&MemoPublicKey>,
        memo: Option<&str>,
        nonce: Option<u64>,
    ) -> Result<String, MemoError> {
        self.encode(private_key, public_key, memo.ok_or(MemoError::MissingInput)?, nonce)
    }

    /// [`decode`](Self::decode) for an optional transaction memo field.
    ///
    /// # Errors
    /// * `MemoError::MissingInput` - `memo` is `None`
    fn decode_field(
        &self,
        private_key: Option<&Self::PrivateKey>,
        memo: Option<&str>,
    ) -> Result<String, MemoError> {
        self.decode(private_key, memo.ok_or(MemoError::MissingInput)?)
    }

    /// Decode many memos with one key, e.g. when scanning account history.
    ///
    /// Results are in input order; one failure does not affect the others.
    fn decode_batch(
        &self,
        private_key: Option<&Self::PrivateKey>,
        memos: &[String],
    ) -> Vec<Result<String, MemoError>>;

    /// Parse a marked token into its envelope without decrypting.
    ///
    /// Returns `Ok(None)` for unmarked memos.
    fn inspect(&self, memo: &str) -> Result<Option<MemoEnvelope>, MemoError>;
}
