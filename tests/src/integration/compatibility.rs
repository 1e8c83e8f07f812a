//! # Wire Compatibility
//!
//! Tokens below were produced by an independent implementation of the memo
//! scheme (secp256k1 ECDH, SHA-512 key schedule, AES-256-CBC, base58) using
//! the scalars `0x11..` (alice) and `0x22..` (bob). Encoding must reproduce
//! them byte for byte and decoding must recover the text from either side.

#[cfg(test)]
mod tests {
    use crate::{alice, bob};
    use memo_crypto::PrivateKey;
    use memo_envelope::domain::{envelope, framing, transport};
    use memo_envelope::{decode, encode, MemoEnvelope, MemoPublicKey};
    use tracing_test::traced_test;

    struct Vector {
        memo: &'static str,
        nonce: u64,
        token: &'static str,
    }

    const ALICE_TO_BOB: &[Vector] = &[
        Vector {
            memo: "#hello world",
            nonce: 1462976530069648,
            token: "#Fys7tVj4gHDpWpgvgAEevFBvHBnU1bXRtSDrWHUJLPJpN58BVKTMxNLQVmVGvjy7WQM7LbdGtEbL552kvdGsBRmiXRoor3M214DZaEm3riC8skgy7LETVkSQ16RUv3ARF",
        },
        Vector {
            memo: "#memo爱",
            nonce: 1,
            token: "#Fys7tVj4gHDpWpgvgAEevFBvHBnU1bXRtSDrWHUJLPJpN58BVKTMxNLQVmVGvjy7WQM7LbdGtEbL552kvdGsBRmiXKHPXSKyLX5xk5LiixYrjMo2ebD4JXfQusc32ujqV",
        },
        Vector {
            memo: "#",
            nonce: 42,
            token: "#Fys7tVj4gHDpWpgvgAEevFBvHBnU1bXRtSDrWHUJLPJpN58BVKTMxNLQVmVGvjy7WQM7LbdGtEbL552kvdGsBRmiXM9Ls29kf7uGNAgvnF9WyWJYzS7KmmFN6Uovv5ktg",
        },
    ];

    const SELF_MEMO: Vector = Vector {
        memo: "#note to self",
        nonce: 7,
        token: "#Fys7tVj4gHDpWpgvgAEevFBvHBnU1bXRtSDrWHUJLPJpN8hHXdwfNYXU4rvtnbPntXvL2pVBkLb9U1bkPBiiVqau8Ny3W92mwqqj52qa1p89QWi76RrzsuBqWsHqrLwjL",
    };

    #[test]
    fn test_encode_reproduces_vectors() {
        for v in ALICE_TO_BOB {
            let token = encode(Some(&alice()), Some(&bob().public_key()), v.memo, Some(v.nonce))
                .unwrap();
            assert_eq!(token, v.token, "memo {:?}", v.memo);
        }
    }

    #[test]
    fn test_decode_vectors_as_recipient_and_sender() {
        for v in ALICE_TO_BOB {
            let expected = &v.memo[1..];
            assert_eq!(decode(Some(&bob()), v.token).unwrap(), expected);
            assert_eq!(decode(Some(&alice()), v.token).unwrap(), expected);
        }
    }

    #[test]
    fn test_self_memo_vector() {
        let token = encode(
            Some(&alice()),
            Some(&alice().public_key()),
            SELF_MEMO.memo,
            Some(SELF_MEMO.nonce),
        )
        .unwrap();
        assert_eq!(token, SELF_MEMO.token);
        assert_eq!(decode(Some(&alice()), SELF_MEMO.token).unwrap(), "note to self");
    }

    #[test]
    fn test_vector_envelope_fields() {
        let bytes = transport::decode_token(ALICE_TO_BOB[0].token).unwrap();
        let env = envelope::parse(&bytes).unwrap();

        assert_eq!(env.from, MemoPublicKey::from(alice().public_key()));
        assert_eq!(env.to, MemoPublicKey::from(bob().public_key()));
        assert_eq!(env.nonce, 1462976530069648);
        assert_eq!(env.check, 4175462404);
        assert_eq!(hex::encode(&env.encrypted), "3081340d8e4911758cc0b1c0096448c2");
    }

    /// Build a token around an arbitrary (possibly non-conformant) frame, the
    /// way the historical encoder did.
    fn legacy_token(frame: &[u8], nonce: u64) -> String {
        let sealed = memo_crypto::encrypt(&alice(), &bob().public_key(), frame, Some(nonce)).unwrap();
        let env = MemoEnvelope {
            from: alice().public_key().into(),
            to: bob().public_key().into(),
            nonce: sealed.nonce,
            check: sealed.checksum,
            encrypted: sealed.ciphertext,
        };
        transport::encode_token(&envelope::serialize(&env))
    }

    #[test]
    #[traced_test]
    fn test_legacy_overlong_prefix_still_decodes() {
        let token = legacy_token(b"\x40legacy client memo", 3);

        assert_eq!(decode(Some(&bob()), &token).unwrap(), "legacy client memo");
        assert!(logs_contain("Memo length prefix does not match remaining bytes"));
    }

    #[test]
    #[traced_test]
    fn test_legacy_invalid_utf8_decodes_lossily() {
        let mut frame = vec![0x04];
        frame.extend_from_slice(&[b'a', 0xc3, b'b', b'c']);
        let token = legacy_token(&frame, 4);

        assert_eq!(decode(Some(&bob()), &token).unwrap(), "a\u{fffd}bc");
        // Prefix is consistent, so no warning
        assert!(!logs_contain("does not match"));
    }

    #[test]
    fn test_conformant_frame_matches_framer() {
        let frame = framing::frame("hello world").unwrap();
        let token = legacy_token(&frame, 1462976530069648);
        assert_eq!(token, ALICE_TO_BOB[0].token);
    }
}
