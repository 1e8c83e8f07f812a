//! # Memo Crypto - secp256k1 Memo Primitives
//!
//! Concrete keys and cipher behind encrypted transaction memos.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `keys` | secp256k1, ECDH | Memo sender / recipient keys |
//! | `symmetric` | AES-256-CBC | Memo body encryption |
//! | `hashing` | SHA-256, SHA-512 | Key schedule and checksum |
//!
//! ## Security Properties
//!
//! - **Shared secret**: SHA-512 of the ECDH x-coordinate, identical for both parties
//! - **Per-message key**: derived from the shared secret and a 64-bit nonce
//! - **Checksum**: 32 bits from the per-message key, verified before decryption

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod keys;
pub mod symmetric;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha256, sha512};
pub use keys::{PrivateKey, PublicKey, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
pub use symmetric::{decrypt, encrypt, generate_nonce, SealedMessage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
