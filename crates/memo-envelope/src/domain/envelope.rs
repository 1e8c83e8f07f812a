//! # Envelope Codec
//!
//! Binary layout of an encrypted memo. Field order and widths are shared with
//! every other producer and consumer of memos on the network:
//!
//! ```text
//! from       33 bytes   compressed public key
//! to         33 bytes   compressed public key
//! nonce       8 bytes   u64, little-endian
//! check       4 bytes   u32, little-endian
//! encrypted  varint32 length || bytes
//! ```

use super::entities::{MemoEnvelope, MemoPublicKey, PUBLIC_KEY_LENGTH};
use super::errors::MemoError;
use super::framing::{read_varint32, write_varint32, MAX_VARINT32_LEN};

/// Size of every fixed-width field together.
pub const FIXED_HEADER_LENGTH: usize = PUBLIC_KEY_LENGTH * 2 + 8 + 4;

/// Serialize `envelope` to its wire bytes.
pub fn serialize(envelope: &MemoEnvelope) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(FIXED_HEADER_LENGTH + MAX_VARINT32_LEN + envelope.encrypted.len());

    out.extend_from_slice(envelope.from.as_bytes());
    out.extend_from_slice(envelope.to.as_bytes());
    out.extend_from_slice(&envelope.nonce.to_le_bytes());
    out.extend_from_slice(&envelope.check.to_le_bytes());
    write_varint32(
        u32::try_from(envelope.encrypted.len()).unwrap_or(u32::MAX),
        &mut out,
    );
    out.extend_from_slice(&envelope.encrypted);
    out
}

/// Parse wire bytes into an envelope.
///
/// Keys are checked for a compressed-point prefix only; curve membership is
/// checked by the cipher.
///
/// # Errors
///
/// `MemoError::MalformedEnvelope` if the input is truncated, a key prefix is
/// wrong, or bytes remain after the ciphertext.
pub fn parse(bytes: &[u8]) -> Result<MemoEnvelope, MemoError> {
    let mut reader = Reader::new(bytes);

    let from = reader.public_key("from")?;
    let to = reader.public_key("to")?;
    let nonce = u64::from_le_bytes(reader.array::<8>("nonce")?);
    let check = u32::from_le_bytes(reader.array::<4>("check")?);
    let encrypted = reader.length_prefixed("encrypted")?.to_vec();

    if !reader.is_empty() {
        return Err(MemoError::MalformedEnvelope(format!(
            "{} unexpected trailing bytes",
            reader.remaining()
        )));
    }

    Ok(MemoEnvelope {
        from,
        to,
        nonce,
        check,
        encrypted,
    })
}

/// Forward-only cursor over the envelope bytes.
struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8], MemoError> {
        if self.remaining() < len {
            return Err(MemoError::MalformedEnvelope(format!(
                "truncated at `{}`: need {} bytes, have {}",
                field,
                len,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self, field: &str) -> Result<[u8; N], MemoError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    fn public_key(&mut self, field: &str) -> Result<MemoPublicKey, MemoError> {
        let bytes = self.array::<PUBLIC_KEY_LENGTH>(field)?;
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(MemoError::MalformedEnvelope(format!(
                "`{}` is not a compressed public key (prefix {:#04x})",
                field, bytes[0]
            )));
        }
        Ok(MemoPublicKey::from_bytes(bytes))
    }

    fn length_prefixed(&mut self, field: &str) -> Result<&'a [u8], MemoError> {
        let (len, consumed) = read_varint32(&self.bytes[self.offset..]).ok_or_else(|| {
            MemoError::MalformedEnvelope(format!("`{}` has no readable length prefix", field))
        })?;
        self.offset += consumed;
        self.take(len as usize, field)
    }
}
