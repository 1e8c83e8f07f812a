//! # Memo Flows
//!
//! End-to-end encode/decode through `MemoService` with the production
//! secp256k1 cipher:
//!
//! 1. **Sender → Recipient**: recipient decodes with their own key
//! 2. **Sender → Sender**: sender re-reads what they sent
//! 3. **Self memo**: `to == from` resolves without special-casing
//! 4. **Batch**: a wallet scanning history decodes many memos at once

#[cfg(test)]
mod tests {
    use crate::{alice, bob};
    use memo_crypto::PrivateKey;
    use memo_envelope::{
        MemoCodecApi, MemoConfig, MemoError, MemoPublicKey, MemoService, Secp256k1MemoCipher,
    };
    use proptest::prelude::*;

    fn service() -> MemoService<Secp256k1MemoCipher> {
        MemoService::new(Secp256k1MemoCipher::new())
    }

    fn pk(key: &PrivateKey) -> MemoPublicKey {
        key.public_key().into()
    }

    #[test]
    fn test_example_alice_to_bob() {
        let svc = service();
        let token = svc
            .encode(Some(&alice()), Some(&pk(&bob())), "#hello world", None)
            .unwrap();

        assert!(token.starts_with('#'));
        assert_eq!(svc.decode(Some(&bob()), &token).unwrap(), "hello world");
        assert_eq!(svc.decode(Some(&alice()), &token).unwrap(), "hello world");
    }

    #[test]
    fn test_self_memo() {
        let key = PrivateKey::generate();
        let svc = service();

        let token = svc
            .encode(Some(&key), Some(&pk(&key)), "#remember the milk", None)
            .unwrap();
        assert_eq!(svc.decode(Some(&key), &token).unwrap(), "remember the milk");
    }

    #[test]
    fn test_independently_parsed_recipient_key() {
        let svc = service();
        let text = bob().public_key().to_string();
        let reparsed: memo_crypto::PublicKey = text.parse().unwrap();

        let token = svc
            .encode(Some(&alice()), Some(&reparsed.into()), "#reparsed", None)
            .unwrap();
        assert_eq!(svc.decode(Some(&bob()), &token).unwrap(), "reparsed");
    }

    #[test]
    fn test_random_nonces_differ() {
        let svc = service();
        let first = svc
            .encode(Some(&alice()), Some(&pk(&bob())), "#same text", None)
            .unwrap();
        let second = svc
            .encode(Some(&alice()), Some(&pk(&bob())), "#same text", None)
            .unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_fixed_nonce_is_deterministic() {
        let svc = service();
        let first = svc
            .encode(Some(&alice()), Some(&pk(&bob())), "#same text", Some(77))
            .unwrap();
        let second = svc
            .encode(Some(&alice()), Some(&pk(&bob())), "#same text", Some(77))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unicode_and_long_memos() {
        let svc = service();
        let long = format!("#{}", "ü".repeat(1000));

        for memo in ["#héllo wörld", "#日本語のメモ", "#🦀🦀🦀", long.as_str()] {
            let token = svc
                .encode(Some(&alice()), Some(&pk(&bob())), memo, None)
                .unwrap();
            assert_eq!(svc.decode(Some(&bob()), &token).unwrap(), &memo[1..]);
        }
    }

    #[test]
    fn test_configured_limit_from_builder() {
        let svc = MemoService::with_config(
            Secp256k1MemoCipher,
            MemoConfig::default().with_max_plaintext_bytes(8),
        );
        let result = svc.encode(Some(&alice()), Some(&pk(&bob())), "#123456789", None);
        assert_eq!(result, Err(MemoError::MemoTooLarge { len: 9, max: 8 }));
    }

    #[test]
    fn test_batch_history_scan() {
        let svc = service();
        let carol = PrivateKey::generate();

        let history: Vec<String> = vec![
            svc.encode(Some(&alice()), Some(&pk(&bob())), "#to bob", None).unwrap(),
            svc.encode(Some(&bob()), Some(&pk(&alice())), "#to alice", None).unwrap(),
            "public note".to_string(),
            svc.encode(Some(&alice()), Some(&pk(&carol)), "#to carol", None).unwrap(),
        ];

        let results = svc.decode_batch(Some(&bob()), &history);
        assert_eq!(results[0].as_deref(), Ok("to bob"));
        assert_eq!(results[1].as_deref(), Ok("to alice"));
        assert_eq!(results[2].as_deref(), Ok("public note"));
        assert_eq!(results[3], Err(MemoError::IntegrityCheckFailed));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_roundtrip_random_keys(text in "\\PC{0,200}") {
            let sender = PrivateKey::generate();
            let recipient = PrivateKey::generate();
            let svc = service();
            let memo = format!("#{}", text);

            let token = svc.encode(Some(&sender), Some(&pk(&recipient)), &memo, None).unwrap();
            prop_assert_eq!(svc.decode(Some(&recipient), &token).unwrap(), text.clone());
            prop_assert_eq!(svc.decode(Some(&sender), &token).unwrap(), text);
        }
    }
}
