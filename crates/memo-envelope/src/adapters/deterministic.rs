//! # Deterministic Cipher Adapter
//!
//! Test double for the `MemoCipher` port: fixed nonce, identity "encryption".
//! The checksum covers both keys (order-independent), the nonce and the
//! ciphertext, so any bit flip in `check` or `encrypted` and any key outside
//! the pair is rejected.
//!
//! Offers no confidentiality whatsoever.

use crate::domain::entities::{MemoPublicKey, SealedMemo, PUBLIC_KEY_LENGTH};
use crate::ports::outbound::{CipherError, MemoCipher};

/// "Private" key for [`DeterministicCipher`]: just a public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicKey {
    public: MemoPublicKey,
}

impl DeterministicKey {
    /// Key whose public half is `0x02` followed by 32 copies of `fill`.
    pub fn new(fill: u8) -> Self {
        let mut bytes = [fill; PUBLIC_KEY_LENGTH];
        bytes[0] = 0x02;
        Self {
            public: MemoPublicKey::from_bytes(bytes),
        }
    }

    /// Public half.
    pub fn public_key(&self) -> MemoPublicKey {
        self.public
    }
}

/// Cipher that never varies its output for identical input.
#[derive(Debug, Clone, Copy)]
pub struct DeterministicCipher {
    nonce: u64,
}

impl DeterministicCipher {
    /// Use `nonce` whenever the caller does not supply one.
    pub fn new(nonce: u64) -> Self {
        Self { nonce }
    }

    fn checksum(a: &MemoPublicKey, b: &MemoPublicKey, nonce: u64, ciphertext: &[u8]) -> u32 {
        let (low, high) = if a.as_bytes() <= b.as_bytes() {
            (a, b)
        } else {
            (b, a)
        };

        let mut input = Vec::with_capacity(PUBLIC_KEY_LENGTH * 2 + 8 + ciphertext.len());
        input.extend_from_slice(low.as_bytes());
        input.extend_from_slice(high.as_bytes());
        input.extend_from_slice(&nonce.to_le_bytes());
        input.extend_from_slice(ciphertext);

        let digest = memo_crypto::sha256(&input);
        u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}

impl Default for DeterministicCipher {
    fn default() -> Self {
        Self::new(0x0123_4567_89ab_cdef)
    }
}

impl MemoCipher for DeterministicCipher {
    type PrivateKey = DeterministicKey;

    fn public_key(&self, private_key: &DeterministicKey) -> MemoPublicKey {
        private_key.public
    }

    fn validate_public_key(&self, public_key: &MemoPublicKey) -> Result<(), CipherError> {
        match public_key.as_bytes()[0] {
            0x02 | 0x03 => Ok(()),
            prefix => Err(CipherError::InvalidKey(format!(
                "bad prefix {:#04x}",
                prefix
            ))),
        }
    }

    fn encrypt(
        &self,
        private_key: &DeterministicKey,
        public_key: &MemoPublicKey,
        plaintext: &[u8],
        nonce: Option<u64>,
    ) -> Result<SealedMemo, CipherError> {
        self.validate_public_key(public_key)?;
        let nonce = nonce.unwrap_or(self.nonce);

        Ok(SealedMemo {
            nonce,
            checksum: Self::checksum(&private_key.public, public_key, nonce, plaintext),
            ciphertext: plaintext.to_vec(),
        })
    }

    fn decrypt(
        &self,
        private_key: &DeterministicKey,
        counterparty: &MemoPublicKey,
        nonce: u64,
        ciphertext: &[u8],
        checksum: u32,
    ) -> Result<Vec<u8>, CipherError> {
        if Self::checksum(&private_key.public, counterparty, nonce, ciphertext) != checksum {
            return Err(CipherError::IntegrityCheckFailed);
        }
        Ok(ciphertext.to_vec())
    }
}
