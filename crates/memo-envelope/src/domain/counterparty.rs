//! # Counterparty Selection
//!
//! Whoever decrypts needs the *other* party's public key. If the local key is
//! the envelope's sender, that is `to`; otherwise it is `from`. A memo sent to
//! oneself resolves to the same key either way.
//!
//! Comparison is over the canonical compressed bytes, never identity.

use super::entities::{MemoEnvelope, MemoPublicKey};

/// Pick the counterparty for `local_public_key`.
pub fn select_counterparty<'a>(
    local_public_key: &MemoPublicKey,
    envelope: &'a MemoEnvelope,
) -> &'a MemoPublicKey {
    if local_public_key.as_bytes() == envelope.from.as_bytes() {
        &envelope.to
    } else {
        &envelope.from
    }
}
