//! # SHA-2 Hashing
//!
//! One-shot SHA-256 / SHA-512 helpers used by the memo key schedule.

use sha2::{Digest, Sha256, Sha512};

/// SHA-512 output (512-bit).
pub type Hash512 = [u8; 64];

/// SHA-256 output (256-bit).
pub type Hash256 = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash256 {
    Sha256::digest(data).into()
}

/// Hash data with SHA-512 (one-shot).
pub fn sha512(data: &[u8]) -> Hash512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Sha512::digest(data));
    out
}
