//! # Memo Cipher
//!
//! AES-256-CBC keyed from an ECDH shared secret and a 64-bit nonce.
//!
//! ## Key Schedule
//!
//! ```text
//! digest   = SHA-512( u64_le(nonce) || SHA-512(ecdh_x) )
//! key      = digest[0..32]
//! iv       = digest[32..48]
//! checksum = u32_le( SHA-256(digest)[0..4] )
//! ```
//!
//! The checksum depends only on the key material and the nonce. It tells the
//! receiver whether it derived the same secret as the sender; it does not
//! authenticate the ciphertext.

use crate::hashing::{sha256, sha512};
use crate::keys::{PrivateKey, PublicKey};
use crate::CryptoError;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use zeroize::{Zeroize, ZeroizeOnDrop};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Output of [`encrypt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedMessage {
    /// Nonce the message key was derived from
    pub nonce: u64,
    /// Key-material checksum the receiver must reproduce
    pub checksum: u32,
    /// AES-256-CBC ciphertext (PKCS#7 padded)
    pub ciphertext: Vec<u8>,
}

/// Per-message AES key, IV and checksum.
#[derive(Zeroize, ZeroizeOnDrop)]
struct MessageKey {
    key: [u8; 32],
    iv: [u8; 16],
    #[zeroize(skip)]
    checksum: u32,
}

impl MessageKey {
    fn derive(
        private_key: &PrivateKey,
        public_key: &PublicKey,
        nonce: u64,
    ) -> Result<Self, CryptoError> {
        let mut seed = [0u8; 72];
        seed[..8].copy_from_slice(&nonce.to_le_bytes());
        seed[8..].copy_from_slice(&private_key.shared_secret(public_key)?);

        let mut digest = sha512(&seed);
        seed.zeroize();

        let check = sha256(&digest);
        let checksum = u32::from_le_bytes([check[0], check[1], check[2], check[3]]);

        let mut key = [0u8; 32];
        let mut iv = [0u8; 16];
        key.copy_from_slice(&digest[..32]);
        iv.copy_from_slice(&digest[32..48]);
        digest.zeroize();

        Ok(Self { key, iv, checksum })
    }
}

/// Draw a fresh nonce from the thread RNG.
pub fn generate_nonce() -> u64 {
    rand::RngCore::next_u64(&mut rand::thread_rng())
}

/// Encrypt `plaintext` from `private_key` to `public_key`.
///
/// `nonce` should only be fixed for deterministic tests; `None` draws a fresh
/// one.
///
/// # Errors
///
/// Returns `CryptoError::InvalidPublicKey` if `public_key` is not on the curve.
pub fn encrypt(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    plaintext: &[u8],
    nonce: Option<u64>,
) -> Result<SealedMessage, CryptoError> {
    let nonce = nonce.unwrap_or_else(generate_nonce);
    let message_key = MessageKey::derive(private_key, public_key, nonce)?;

    let ciphertext = Aes256CbcEnc::new(&message_key.key.into(), &message_key.iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    Ok(SealedMessage {
        nonce,
        checksum: message_key.checksum,
        ciphertext,
    })
}

/// Decrypt a message exchanged between `private_key` and `public_key`.
///
/// # Errors
///
/// - `CryptoError::ChecksumMismatch` if the derived checksum differs from
///   `checksum` (wrong key or tampered header). Checked before decryption.
/// - `CryptoError::DecryptionFailed` if the padding is invalid.
pub fn decrypt(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    nonce: u64,
    ciphertext: &[u8],
    checksum: u32,
) -> Result<Vec<u8>, CryptoError> {
    let message_key = MessageKey::derive(private_key, public_key, nonce)?;

    if message_key.checksum != checksum {
        return Err(CryptoError::ChecksumMismatch {
            expected: checksum,
            actual: message_key.checksum,
        });
    }

    Aes256CbcDec::new(&message_key.key.into(), &message_key.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
}
