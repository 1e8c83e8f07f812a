//! # Memo Service
//!
//! Application service layer that implements the `MemoCodecApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`MemoCodecApi`)
//! - Uses the outbound port (`MemoCipher`) for key derivation and encryption
//! - Delegates marker, framing, envelope and transport work to the domain layer
//!
//! ## Flow
//!
//! ```text
//! encode: marker -> frame -> encrypt -> envelope::serialize -> base58 + '#'
//! decode: marker -> base58 -> envelope::parse -> counterparty -> decrypt -> unframe
//! ```

use crate::config::MemoConfig;
use crate::domain::counterparty::select_counterparty;
use crate::domain::entities::{MemoEnvelope, MemoPublicKey};
use crate::domain::errors::{KeyRole, MemoError};
use crate::domain::{envelope, framing, marker, transport};
use crate::ports::inbound::MemoCodecApi;
use crate::ports::outbound::MemoCipher;
use memo_telemetry::log_event;
use rayon::prelude::*;

/// Memo Service.
///
/// Stateless apart from its configuration; every call works on its own
/// buffers, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct MemoService<C: MemoCipher> {
    cipher: C,
    config: MemoConfig,
}

impl<C: MemoCipher> MemoService<C> {
    /// Create a service with default configuration.
    pub fn new(cipher: C) -> Self {
        Self::with_config(cipher, MemoConfig::default())
    }

    /// Create a service with explicit configuration.
    pub fn with_config(cipher: C, config: MemoConfig) -> Self {
        Self { cipher, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &MemoConfig {
        &self.config
    }

    /// Build the envelope for a plaintext body (sentinel already removed).
    fn seal(
        &self,
        private_key: &C::PrivateKey,
        public_key: &MemoPublicKey,
        body: &str,
        nonce: Option<u64>,
    ) -> Result<MemoEnvelope, MemoError> {
        self.config.check_plaintext_len(body.len())?;

        let frame = framing::frame(body)?;
        let sealed = self.cipher.encrypt(private_key, public_key, &frame, nonce)?;

        Ok(MemoEnvelope {
            from: self.cipher.public_key(private_key),
            to: *public_key,
            nonce: sealed.nonce,
            check: sealed.checksum,
            encrypted: sealed.ciphertext,
        })
    }

    /// Decrypt a parsed envelope with `private_key`.
    fn open(
        &self,
        private_key: &C::PrivateKey,
        envelope: &MemoEnvelope,
    ) -> Result<String, MemoError> {
        for key in [&envelope.from, &envelope.to] {
            self.cipher
                .validate_public_key(key)
                .map_err(|e| MemoError::MalformedEnvelope(e.to_string()))?;
        }

        let local = self.cipher.public_key(private_key);
        let counterparty = select_counterparty(&local, envelope);

        let frame = self.cipher.decrypt(
            private_key,
            counterparty,
            envelope.nonce,
            &envelope.encrypted,
            envelope.check,
        )?;

        Ok(framing::unframe(&frame)?.text)
    }
}

impl<C> MemoCodecApi for MemoService<C>
where
    C: MemoCipher,
    C::PrivateKey: Sync,
{
    type PrivateKey = C::PrivateKey;

    fn encode(
        &self,
        private_key: Option<&C::PrivateKey>,
        public_key: Option<&MemoPublicKey>,
        memo: &str,
        nonce: Option<u64>,
    ) -> Result<String, MemoError> {
        if !marker::is_marked(memo) {
            return Ok(memo.to_owned());
        }
        let body = marker::strip(memo);

        let private_key = private_key.ok_or(MemoError::MissingKey(KeyRole::Private))?;
        let public_key = public_key.ok_or(MemoError::MissingKey(KeyRole::Public))?;

        let sealed = self.seal(private_key, public_key, body, nonce)?;
        let token = transport::encode_token(&envelope::serialize(&sealed));

        log_event!(
            debug,
            "memo",
            "Memo encoded",
            to = %sealed.to,
            self_addressed = sealed.is_self_addressed(),
            token_len = token.len()
        );
        Ok(token)
    }

    fn decode(
        &self,
        private_key: Option<&C::PrivateKey>,
        memo: &str,
    ) -> Result<String, MemoError> {
        if !marker::is_marked(memo) {
            return Ok(memo.to_owned());
        }

        let private_key = private_key.ok_or(MemoError::MissingKey(KeyRole::Private))?;

        let bytes = transport::decode_token(memo)?;
        let parsed = envelope::parse(&bytes)?;

        match self.open(private_key, &parsed) {
            Ok(text) => {
                log_event!(
                    debug,
                    "memo",
                    "Memo decoded",
                    from = %parsed.from,
                    self_addressed = parsed.is_self_addressed()
                );
                Ok(text)
            }
            Err(e) => {
                log_event!(debug, "memo", "Memo decode failed", error = %e);
                Err(e)
            }
        }
    }

    fn decode_batch(
        &self,
        private_key: Option<&C::PrivateKey>,
        memos: &[String],
    ) -> Vec<Result<String, MemoError>> {
        memos
            .par_iter()
            .map(|memo| self.decode(private_key, memo))
            .collect()
    }

    fn inspect(&self, memo: &str) -> Result<Option<MemoEnvelope>, MemoError> {
        if !marker::is_marked(memo) {
            return Ok(None);
        }
        let bytes = transport::decode_token(memo)?;
        envelope::parse(&bytes).map(Some)
    }
}
