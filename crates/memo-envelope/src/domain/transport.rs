//! # Textual Transport
//!
//! `'#' + base58(envelope_bytes)`, using the standard Bitcoin alphabet and no
//! checksum of its own.

use super::errors::MemoError;
use super::marker;

/// Render envelope bytes as a marked token.
pub fn encode_token(envelope_bytes: &[u8]) -> String {
    marker::mark(&bs58::encode(envelope_bytes).into_string())
}

/// Strip the sentinel (if present) and base58-decode the rest.
///
/// # Errors
///
/// `MemoError::InvalidToken` if a character is outside the base58 alphabet.
pub fn decode_token(token: &str) -> Result<Vec<u8>, MemoError> {
    bs58::decode(marker::strip(token))
        .into_vec()
        .map_err(|e| MemoError::InvalidToken(e.to_string()))
}
