//! # secp256k1 Keys
//!
//! Key types used on both ends of an encrypted memo.
//!
//! ## Canonical Form
//!
//! A public key is always held as its 33-byte SEC1 compressed point. Equality,
//! hashing and the textual form (lowercase hex) are all defined over those
//! bytes, so two independently parsed keys for the same point compare equal.
//!
//! ## Shared Secret
//!
//! `shared_secret` is SHA-512 over the x-coordinate of the ECDH point. Both
//! parties arrive at the same 64 bytes: `a * B == b * A`.

use crate::hashing::sha512;
use crate::CryptoError;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;
use std::str::FromStr;

/// Length of a compressed SEC1 public key.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Length of a raw secret scalar.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Result<Self, CryptoError> {
        // Validate it's a valid compressed point
        k256::PublicKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Create from a slice, which must be exactly 33 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; PUBLIC_KEY_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyLength {
                    expected: PUBLIC_KEY_LENGTH,
                    actual: bytes.len(),
                })?;
        Self::from_bytes(array)
    }

    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Lowercase hex of the compressed point.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn to_point(self) -> Result<k256::PublicKey, CryptoError> {
        k256::PublicKey::from_sec1_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| CryptoError::InvalidInput(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

/// secp256k1 private key.
///
/// The scalar is wiped when the key is dropped (`k256::SecretKey` zeroizes
/// itself), and `Debug` only ever prints the public half.
#[derive(Clone)]
pub struct PrivateKey {
    secret: k256::SecretKey,
}

impl PrivateKey {
    /// Generate random key.
    pub fn generate() -> Self {
        let secret = k256::SecretKey::random(&mut rand::thread_rng());
        Self { secret }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Result<Self, CryptoError> {
        let secret =
            k256::SecretKey::from_slice(&bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { secret })
    }

    /// Create from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        let key = Self::from_bytes(bytes);
        zeroize::Zeroize::zeroize(&mut bytes);
        key
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        bytes.copy_from_slice(&self.secret.to_bytes());
        bytes
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> PublicKey {
        let encoded = self.secret.public_key().to_encoded_point(true);
        // Compressed SEC1 encoding of a non-identity point is always 33 bytes
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes.copy_from_slice(encoded.as_bytes());
        PublicKey(bytes)
    }

    /// Derive the 64-byte shared secret with `public_key`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidPublicKey` if `public_key` is not a point
    /// on the curve.
    pub fn shared_secret(&self, public_key: &PublicKey) -> Result<[u8; 64], CryptoError> {
        let point = public_key.to_point()?;
        let shared = k256::ecdh::diffie_hellman(self.secret.to_nonzero_scalar(), point.as_affine());
        Ok(sha512(shared.raw_secret_bytes()))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}
