//! # Plaintext Framing
//!
//! Before encryption the memo text is framed as `varint32(len) || utf8`.
//!
//! ## Two-Stage Unframe
//!
//! Decoding tries [`TryStrictFrame`] first: the prefix is honoured and the
//! declared slice must be valid UTF-8. If that fails, [`FallbackLenientFrame`]
//! reads the prefix again, decodes *all* remaining bytes lossily and reports a
//! [`FramingWarning`] when the prefix disagrees with what is left.
//!
//! The fallback exists because one historical encoder wrote inconsistent
//! prefixes. Those memos are legitimate and must keep decoding; a mismatched
//! prefix is never an error on its own.

use super::errors::MemoError;
use memo_telemetry::log_event;
use thiserror::Error;

/// A varint32 occupies at most five bytes.
pub const MAX_VARINT32_LEN: usize = 5;

// =============================================================================
// VARINT
// =============================================================================

/// Append `value` as a little-endian base-128 varint.
pub fn write_varint32(value: u32, out: &mut Vec<u8>) {
    let mut value = value;
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Read a varint32 from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` if the input
/// ends mid-varint or the varint runs past five bytes. Bits above 32 in the
/// fifth byte are discarded.
pub fn read_varint32(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut value: u32 = 0;
    for (i, &byte) in bytes.iter().take(MAX_VARINT32_LEN).enumerate() {
        value |= u32::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

// =============================================================================
// FRAME
// =============================================================================

/// Frame `text` as `varint32(byte_len) || utf8_bytes`.
///
/// # Errors
///
/// `MemoError::MemoTooLarge` if the text does not fit a 32-bit length.
pub fn frame(text: &str) -> Result<Vec<u8>, MemoError> {
    let len = u32::try_from(text.len()).map_err(|_| MemoError::MemoTooLarge {
        len: text.len(),
        max: u32::MAX as usize,
    })?;

    let mut out = Vec::with_capacity(MAX_VARINT32_LEN + text.len());
    write_varint32(len, &mut out);
    out.extend_from_slice(text.as_bytes());
    Ok(out)
}

// =============================================================================
// UNFRAME STRATEGIES
// =============================================================================

/// Diagnostic emitted when a frame's declared length disagrees with the bytes
/// that follow it. Decoding still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingWarning {
    /// Length claimed by the varint prefix
    pub declared_len: usize,
    /// Bytes actually following the prefix
    pub remaining_len: usize,
}

/// A decoded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unframed {
    /// Recovered memo text
    pub text: String,
    /// Set only by the lenient path when the prefix was inconsistent
    pub warning: Option<FramingWarning>,
}

/// Why a single strategy could not read a frame.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameError {
    /// No readable varint at the start of the frame
    #[error("frame has no readable length prefix")]
    MissingPrefix,

    /// Prefix claims more bytes than are present
    #[error("frame declares {declared} bytes but only {remaining} remain")]
    Truncated {
        /// Declared length
        declared: usize,
        /// Bytes after the prefix
        remaining: usize,
    },

    /// Declared slice is not valid UTF-8
    #[error("frame is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// One way of turning decrypted bytes back into text.
pub trait FrameReader {
    /// Read `frame`.
    fn read(&self, frame: &[u8]) -> Result<Unframed, FrameError>;
}

/// Length-prefixed read with strict UTF-8. Bytes past the declared length are
/// ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TryStrictFrame;

impl FrameReader for TryStrictFrame {
    fn read(&self, frame: &[u8]) -> Result<Unframed, FrameError> {
        let (declared, prefix_len) = read_varint32(frame).ok_or(FrameError::MissingPrefix)?;
        let body = &frame[prefix_len..];
        let declared = declared as usize;

        let slice = body.get(..declared).ok_or(FrameError::Truncated {
            declared,
            remaining: body.len(),
        })?;
        let text =
            std::str::from_utf8(slice).map_err(|e| FrameError::InvalidUtf8(e.to_string()))?;

        Ok(Unframed {
            text: text.to_owned(),
            warning: None,
        })
    }
}

/// Skip the prefix and decode every remaining byte, replacing invalid UTF-8.
/// Warns when the prefix disagrees with the remaining length.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackLenientFrame;

impl FrameReader for FallbackLenientFrame {
    fn read(&self, frame: &[u8]) -> Result<Unframed, FrameError> {
        let (declared, prefix_len) = read_varint32(frame).ok_or(FrameError::MissingPrefix)?;
        let body = &frame[prefix_len..];
        let declared = declared as usize;

        let warning = (declared != body.len()).then_some(FramingWarning {
            declared_len: declared,
            remaining_len: body.len(),
        });

        if let Some(w) = &warning {
            log_event!(
                warn,
                "memo",
                "Memo length prefix does not match remaining bytes",
                declared_len = w.declared_len,
                remaining_len = w.remaining_len
            );
        }

        Ok(Unframed {
            text: String::from_utf8_lossy(body).into_owned(),
            warning,
        })
    }
}

/// Strict read, then lenient fallback.
///
/// # Errors
///
/// `MemoError::MalformedEnvelope` only when neither strategy can find a
/// length prefix.
pub fn unframe(frame: &[u8]) -> Result<Unframed, MemoError> {
    match TryStrictFrame.read(frame) {
        Ok(unframed) => Ok(unframed),
        Err(strict) => {
            tracing::debug!(reason = %strict, "Strict memo frame read failed, trying lenient read");
            FallbackLenientFrame
                .read(frame)
                .map_err(|e| MemoError::MalformedEnvelope(e.to_string()))
        }
    }
}
