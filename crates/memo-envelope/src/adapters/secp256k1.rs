//! # secp256k1 Cipher Adapter
//!
//! Wires `memo-crypto` (ECDH + AES-256-CBC) to the `MemoCipher` port.

use crate::domain::entities::{MemoPublicKey, SealedMemo};
use crate::ports::outbound::{CipherError, MemoCipher};
use memo_crypto::{CryptoError, PrivateKey, PublicKey};

impl From<PublicKey> for MemoPublicKey {
    fn from(key: PublicKey) -> Self {
        MemoPublicKey::from_bytes(*key.as_bytes())
    }
}

impl From<&PublicKey> for MemoPublicKey {
    fn from(key: &PublicKey) -> Self {
        MemoPublicKey::from_bytes(*key.as_bytes())
    }
}

impl TryFrom<&MemoPublicKey> for PublicKey {
    type Error = CipherError;

    fn try_from(key: &MemoPublicKey) -> Result<Self, Self::Error> {
        PublicKey::from_bytes(*key.as_bytes()).map_err(|e| CipherError::InvalidKey(e.to_string()))
    }
}

impl From<CryptoError> for CipherError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::ChecksumMismatch { .. } | CryptoError::DecryptionFailed(_) => {
                CipherError::IntegrityCheckFailed
            }
            CryptoError::InvalidPublicKey
            | CryptoError::InvalidPrivateKey
            | CryptoError::InvalidKeyLength { .. } => CipherError::InvalidKey(e.to_string()),
            other => CipherError::Failed(other.to_string()),
        }
    }
}

/// Production memo cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1MemoCipher;

impl Secp256k1MemoCipher {
    /// Create a new cipher adapter.
    pub fn new() -> Self {
        Self
    }
}

impl MemoCipher for Secp256k1MemoCipher {
    type PrivateKey = PrivateKey;

    fn public_key(&self, private_key: &PrivateKey) -> MemoPublicKey {
        private_key.public_key().into()
    }

    fn validate_public_key(&self, public_key: &MemoPublicKey) -> Result<(), CipherError> {
        PublicKey::try_from(public_key).map(|_| ())
    }

    fn encrypt(
        &self,
        private_key: &PrivateKey,
        public_key: &MemoPublicKey,
        plaintext: &[u8],
        nonce: Option<u64>,
    ) -> Result<SealedMemo, CipherError> {
        let public_key = PublicKey::try_from(public_key)?;
        let sealed = memo_crypto::encrypt(private_key, &public_key, plaintext, nonce)?;

        Ok(SealedMemo {
            nonce: sealed.nonce,
            checksum: sealed.checksum,
            ciphertext: sealed.ciphertext,
        })
    }

    fn decrypt(
        &self,
        private_key: &PrivateKey,
        counterparty: &MemoPublicKey,
        nonce: u64,
        ciphertext: &[u8],
        checksum: u32,
    ) -> Result<Vec<u8>, CipherError> {
        let counterparty = PublicKey::try_from(counterparty)?;
        Ok(memo_crypto::decrypt(
            private_key,
            &counterparty,
            nonce,
            ciphertext,
            checksum,
        )?)
    }
}
