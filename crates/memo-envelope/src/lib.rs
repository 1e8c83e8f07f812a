//! # Encrypted Memo Subsystem
//!
//! Confidential memos for transaction fields. A memo starting with `#` is
//! encrypted to the recipient and carried as `'#' + base58(envelope)`; any
//! other memo passes through untouched.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Marker, framing, envelope codec, counterparty
//!   selection and base58 transport. Pure, no I/O
//! - **Ports Layer** (`ports/`): `MemoCodecApi` (inbound) and `MemoCipher` (outbound)
//! - **Adapters Layer** (`adapters/`): secp256k1 cipher and a deterministic test cipher
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Security Notes
//!
//! - **Integrity**: a checksum mismatch is always an error, never a best-effort decode
//! - **Legacy frames**: an inconsistent plaintext length prefix is tolerated with a
//!   warning, so memos from a known non-conformant historical encoder stay readable
//! - **Nonces**: only fix a nonce in tests; reuse under the same key pair leaks plaintext

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::deterministic::{DeterministicCipher, DeterministicKey};
pub use adapters::secp256k1::Secp256k1MemoCipher;
pub use config::MemoConfig;
pub use domain::entities::{MemoEnvelope, MemoPublicKey, SealedMemo, PUBLIC_KEY_LENGTH};
pub use domain::errors::{KeyRole, MemoError};
pub use domain::framing::{FramingWarning, Unframed};
pub use ports::inbound::MemoCodecApi;
pub use ports::outbound::{CipherError, MemoCipher};
pub use service::MemoService;

use memo_crypto::{PrivateKey, PublicKey};

/// Encode `memo` with the secp256k1 cipher.
///
/// Unmarked memos are returned unchanged and need no keys.
pub fn encode(
    private_key: Option<&PrivateKey>,
    public_key: Option<&PublicKey>,
    memo: &str,
    nonce: Option<u64>,
) -> Result<String, MemoError> {
    let public_key = public_key.map(MemoPublicKey::from);
    MemoService::new(Secp256k1MemoCipher).encode(private_key, public_key.as_ref(), memo, nonce)
}

/// Decode `memo` with the secp256k1 cipher, as sender or recipient.
///
/// Unmarked memos are returned unchanged and need no key.
pub fn decode(private_key: Option<&PrivateKey>, memo: &str) -> Result<String, MemoError> {
    MemoService::new(Secp256k1MemoCipher).decode(private_key, memo)
}
