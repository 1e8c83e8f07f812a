//! # Domain Entities
//!
//! The envelope carried inside a `#`-marked memo, and the cipher output it is
//! built from.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

/// Length of a compressed public key on the wire.
pub const PUBLIC_KEY_LENGTH: usize = 33;

// =============================================================================
// Keys
// =============================================================================

/// Public key as carried in an envelope: the 33-byte compressed point.
///
/// Equality is byte equality of the compressed encoding, so two keys parsed
/// independently from the same point always compare equal.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoPublicKey {
    /// Compressed SEC1 point bytes
    #[serde_as(as = "Bytes")]
    pub bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl MemoPublicKey {
    /// Wrap compressed point bytes. No curve check happens here; that is the
    /// cipher's job (see `MemoCipher::validate_public_key`).
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Canonical textual form (lowercase hex).
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for MemoPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for MemoPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoPublicKey({})", self.to_hex())
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// One encrypted memo.
///
/// `from` is always the encoder's own key. For a memo sent to oneself `from`
/// and `to` hold the same key but remain separate fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoEnvelope {
    /// Sender's public key
    pub from: MemoPublicKey,
    /// Recipient's public key
    pub to: MemoPublicKey,
    /// Cipher nonce
    pub nonce: u64,
    /// Checksum derived from the shared secret
    pub check: u32,
    /// Ciphertext of the framed plaintext
    pub encrypted: Vec<u8>,
}

impl MemoEnvelope {
    /// Serialize to the binary wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        super::envelope::serialize(self)
    }

    /// Parse from the binary wire layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, super::errors::MemoError> {
        super::envelope::parse(bytes)
    }

    /// Whether sender and recipient are the same key.
    pub fn is_self_addressed(&self) -> bool {
        self.from == self.to
    }
}

// =============================================================================
// Cipher Output
// =============================================================================

/// What the cipher hands back from `encrypt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedMemo {
    /// Nonce actually used
    pub nonce: u64,
    /// Checksum the receiver must reproduce
    pub checksum: u32,
    /// Ciphertext
    pub ciphertext: Vec<u8>,
}
